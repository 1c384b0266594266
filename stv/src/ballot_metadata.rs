// Copyright 2021-2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.


//! Information about the contest, such as candidates.

use serde::{Serialize,Deserialize};
use std::fmt;
use std::borrow::Borrow;

/// a candidate, referred to by the name written on the ballot paper.
/// Ordering is lexicographic on the name, which is what ties are broken by.
#[derive(Clone, PartialEq, Eq, Hash, Ord, PartialOrd,Serialize,Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn name(&self) -> &str { &self.0 }
}

// type alias really, don't want long display
impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

impl From<&str> for CandidateId {
    fn from(name: &str) -> Self { CandidateId(name.to_string()) }
}
impl From<String> for CandidateId {
    fn from(name: String) -> Self { CandidateId(name) }
}

impl Borrow<str> for CandidateId {
    fn borrow(&self) -> &str { &self.0 }
}

/// Where a candidate stands with respect to a particular count.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub enum CandidateStatus {
    /// Neither elected nor eliminated (yet).
    Continuing,
    Elected,
    Eliminated,
    /// Never mentioned on any ballot.
    NotStanding,
}
