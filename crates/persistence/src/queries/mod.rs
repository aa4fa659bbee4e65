// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `users`: User lookups and credential checks
//! - `events`: Events joined with their creator
//! - `registrations`: Registrations, including the per-student view
//! - `attendance` / `feedback`: Records keyed by registration
//! - `tokens`: Token lookups
//! - `reports`: Aggregated counts for the admin reports

pub mod attendance;
pub mod events;
pub mod feedback;
pub mod registrations;
pub mod reports;
pub mod tokens;
pub mod users;
