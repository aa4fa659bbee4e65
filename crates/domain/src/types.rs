// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed classification of a user.
///
/// Roles gate which operations a caller may perform. There is no
/// hierarchy: an admin cannot act as a student and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Creates events, marks attendance and reads reports.
    Admin,
    /// Registers for events, lists own registrations and submits feedback.
    Student,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "student" => Ok(Self::Student),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Returns the stored string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
        }
    }
}

/// The kind of a campus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Workshop,
    Fest,
    Seminar,
    Talk,
    #[default]
    Other,
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workshop" => Ok(Self::Workshop),
            "fest" => Ok(Self::Fest),
            "seminar" => Ok(Self::Seminar),
            "talk" => Ok(Self::Talk),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidEventType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl EventType {
    /// Returns the stored string representation of this event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workshop => "workshop",
            Self::Fest => "fest",
            Self::Seminar => "seminar",
            Self::Talk => "talk",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label for this event type.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Workshop => "Workshop",
            Self::Fest => "Fest",
            Self::Seminar => "Seminar",
            Self::Talk => "Tech Talk",
            Self::Other => "Other",
        }
    }
}

/// The status of a student's registration for an event.
///
/// Registrations are created as `Registered`. `Cancelled` is part of the
/// stored vocabulary but no operation currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Registered,
    Cancelled,
}

impl FromStr for RegistrationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(Self::Registered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidRegistrationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RegistrationStatus {
    /// Returns the stored string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A validated feedback rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// The lowest accepted rating.
    pub const MIN: u8 = 1;
    /// The highest accepted rating.
    pub const MAX: u8 = 5;

    /// Creates a rating, rejecting values outside `MIN..=MAX`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(DomainError::InvalidRating {
                rating: value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// Returns the numeric rating.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        Self::from(rating.0)
    }
}
