// Copyright 2021-2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.


//! Deal with candidates having the same tally.
//!
//! There is no countback and no random draw. Equal tallies are ordered by candidate name,
//! and all candidates sharing the lowest tally are excluded together. This keeps a count
//! reproducible from the ballots alone. Ties that made a difference are noted in the transcript.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use serde::{Serialize,Deserialize};
use crate::ballot_metadata::CandidateId;
use crate::ballot_pile::BallotPaperCount;

/// Highest tally first, then lexicographically smallest name first.
pub fn order_by_tally_then_name(a:&(CandidateId,BallotPaperCount),b:&(CandidateId,BallotPaperCount)) -> Ordering {
    b.1.cmp(&a.1).then_with(||a.0.cmp(&b.0))
}

#[derive(Copy,Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub enum TieResolution {
    /// Several candidates shared the lowest tally, and were all excluded in the same count.
    AllExcludedTogether,
    /// Several candidates had the same tally, at least a quota, but there were not enough
    /// vacancies for all of them. The earliest by name were elected.
    OrderedByName,
}

/// A record that a tie affected what happened in a count.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct TieNote {
    /// The tied candidates, in the order they were considered.
    pub affected : Vec<CandidateId>,
    pub tally : BallotPaperCount,
    pub resolution : TieResolution,
}

impl Display for TieNote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let who = self.affected.iter().map(|c|c.to_string()).collect::<Vec<_>>().join(",");
        match self.resolution {
            TieResolution::AllExcludedTogether => write!(f,"Tie on {} between {} : all excluded",self.tally,who),
            TieResolution::OrderedByName => write!(f,"Tie on {} between {} : resolved by name",self.tally,who),
        }
    }
}

/// Given candidates sorted by [order_by_tally_then_name] and the number of them that were
/// chosen from the top, check whether the cut point split a group of candidates with equal tallies.
/// If so, return the whole group.
pub fn tie_straddling_cut(sorted:&[(CandidateId,BallotPaperCount)],chosen:usize) -> Option<TieNote> {
    if chosen==0 || chosen>=sorted.len() { return None; }
    let tally = sorted[chosen-1].1;
    if sorted[chosen].1!=tally { return None; }
    let affected : Vec<CandidateId> = sorted.iter().filter(|(_,t)|*t==tally).map(|(c,_)|c.clone()).collect();
    Some(TieNote{ affected, tally, resolution: TieResolution::OrderedByName })
}
