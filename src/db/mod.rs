// SPDX-License-Identifier: MIT

//! Database layer.

pub mod postgres;

pub use postgres::{Db, MealLogEntry, MealLogRow};
