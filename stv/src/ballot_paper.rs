// Copyright 2021-2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.


//! A ranked vote. That is, the list of candidates written on a ballot paper, most preferred first.
//! Blank squares have already been removed by whatever read the ballot.

use crate::ballot_metadata::CandidateId;
use serde::{Deserialize,Serialize};
use std::collections::HashSet;

#[derive(Clone,Debug,Serialize,Deserialize,PartialEq,Eq)]
#[serde(transparent)]
pub struct RankedBallot {
    /// preferences[0] is the first preferenced candidate.
    pub preferences : Vec<CandidateId>,
}

impl RankedBallot {
    pub fn new<S:Into<CandidateId>>(preferences:impl IntoIterator<Item=S>) -> Self {
        RankedBallot{ preferences : preferences.into_iter().map(|s|s.into()).collect() }
    }

    /// The most preferred candidate on this ballot who is still in the running, if any.
    /// None means the ballot is exhausted.
    pub fn first_continuing<'a>(&'a self,continuing:&HashSet<CandidateId>) -> Option<&'a CandidateId> {
        self.preferences.iter().find(|c|continuing.contains(*c))
    }

    pub fn is_empty(&self) -> bool { self.preferences.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::RankedBallot;
    use crate::ballot_metadata::CandidateId;
    use std::collections::HashSet;

    #[test]
    fn test_first_continuing_skips_non_continuing() {
        let ballot = RankedBallot::new(["C","A","B"]);
        let mut continuing : HashSet<CandidateId> = ["A","B","C"].into_iter().map(CandidateId::from).collect();
        assert_eq!(Some(&CandidateId::from("C")),ballot.first_continuing(&continuing));
        continuing.remove("C");
        assert_eq!(Some(&CandidateId::from("A")),ballot.first_continuing(&continuing));
        continuing.remove("A");
        continuing.remove("B");
        assert_eq!(None,ballot.first_continuing(&continuing));
    }
}
