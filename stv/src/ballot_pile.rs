// Copyright 2021-2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.


//! Things to do with piles of ballots.



use crate::ballot_metadata::CandidateId;
use crate::ballot_paper::RankedBallot;
use std::collections::{BTreeMap, HashSet};
use num::Zero;
use std::ops::{AddAssign, Add};
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// A number representing a count of pieces of paper.
/// With no transfer values in use, this is also the number of votes.
#[derive(Copy,Clone,Eq, PartialEq,Serialize,Deserialize,Ord, PartialOrd,Hash,Default)]
pub struct BallotPaperCount(pub usize);

impl AddAssign for BallotPaperCount {
    fn add_assign(&mut self, rhs: Self) { self.0+=rhs.0; }
}

impl Add for BallotPaperCount {
    type Output = BallotPaperCount;
    fn add(self, rhs: Self) -> Self::Output { BallotPaperCount(self.0+rhs.0) }
}
// type alias really, don't want long display
impl Display for BallotPaperCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl Debug for BallotPaperCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
impl Zero for BallotPaperCount {
    fn zero() -> Self { BallotPaperCount(0) }
    fn is_zero(&self) -> bool { self.0 == 0 }
}
impl Sum for BallotPaperCount {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        BallotPaperCount(usize::sum(iter.map(|b|b.0)))
    }
}

/// The result of giving each ballot to its most preferred continuing candidate.
///
/// Every continuing candidate has an entry, even if no ballots went to them.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct DistributedVotes {
    pub by_candidate : BTreeMap<CandidateId,BallotPaperCount>,
    /// ballots with no continuing candidate left on them.
    pub exhausted : BallotPaperCount,
}

impl DistributedVotes {
    /// Tally each ballot for the first continuing candidate on it, scanning from the raw ballots.
    pub fn distribute(votes:&[RankedBallot],continuing_candidates:&HashSet<CandidateId>) -> Self {
        let mut by_candidate : BTreeMap<CandidateId,BallotPaperCount> = continuing_candidates.iter().map(|c|(c.clone(),BallotPaperCount::zero())).collect();
        let mut exhausted = BallotPaperCount::zero();
        for vote in votes {
            match vote.first_continuing(continuing_candidates) {
                Some(candidate) => *by_candidate.entry(candidate.clone()).or_insert_with(BallotPaperCount::zero)+=BallotPaperCount(1),
                None => exhausted+=BallotPaperCount(1),
            }
        }
        DistributedVotes{by_candidate,exhausted}
    }

    pub fn tally(&self,candidate:&CandidateId) -> BallotPaperCount {
        self.by_candidate.get(candidate).copied().unwrap_or_default()
    }

    /// The total number of ballots going to some candidate.
    pub fn num_continuing_ballots(&self) -> BallotPaperCount { self.by_candidate.values().copied().sum() }

    /// Highest tally first. Equal tallies are ordered by candidate name, lowest first.
    pub fn sorted_by_tally(&self) -> Vec<(CandidateId,BallotPaperCount)> {
        let mut res : Vec<(CandidateId,BallotPaperCount)> = self.by_candidate.iter().map(|(c,t)|(c.clone(),*t)).collect();
        res.sort_by(crate::tie_resolution::order_by_tally_then_name);
        res
    }

    /// The lowest tally held by a candidate with at least one ballot. Candidates on zero are not
    /// considered unless everyone is on zero. None if there are no continuing candidates.
    pub fn lowest_tally(&self) -> Option<BallotPaperCount> {
        self.by_candidate.values().copied().filter(|t|!t.is_zero()).min().or_else(||self.by_candidate.values().copied().min())
    }
}
