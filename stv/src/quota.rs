// Copyright 2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.


//! The Droop quota.

use serde::{Serialize,Deserialize};
use std::fmt::{Display, Formatter};
use crate::ballot_pile::BallotPaperCount;

pub type NumberOfVacancies = usize;

/// quota = round_down(papers/(1+vacancies))+1
///
/// ```
/// use droop_stv::ballot_pile::BallotPaperCount;
/// use droop_stv::quota::droop_quota;
/// assert_eq!(3,droop_quota(BallotPaperCount(5),1));
/// assert_eq!(17,droop_quota(BallotPaperCount(100),5));
/// assert_eq!(1,droop_quota(BallotPaperCount(0),5));
/// ```
pub fn droop_quota(papers:BallotPaperCount,vacancies:NumberOfVacancies) -> usize {
    papers.0/(1+vacancies)+1
}

#[derive(Clone,Copy,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct QuotaInfo {
    pub papers : BallotPaperCount,
    pub vacancies : NumberOfVacancies,
    pub quota : usize,
}

impl QuotaInfo {
    pub fn compute(papers:BallotPaperCount,vacancies:NumberOfVacancies) -> Self {
        QuotaInfo{ papers, vacancies, quota: droop_quota(papers,vacancies) }
    }
}

impl Display for QuotaInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"Quota {} ({} ballots, {} vacancies)",self.quota,self.papers,self.vacancies)
    }
}

#[cfg(test)]
mod tests {
    use super::{droop_quota, QuotaInfo};
    use crate::ballot_pile::BallotPaperCount;

    #[test]
    fn test_quota_formula() {
        for vacancies in 1..8 {
            for papers in 0..200 {
                let quota = droop_quota(BallotPaperCount(papers),vacancies);
                assert_eq!(papers/(vacancies+1)+1,quota);
                assert!(quota>=1);
                // no more than `vacancies` disjoint groups of ballots can each hold a quota.
                assert!(quota*(vacancies+1)>papers);
            }
        }
    }

    #[test]
    fn test_quota_info() {
        let info = QuotaInfo::compute(BallotPaperCount(5),1);
        assert_eq!(3,info.quota);
        assert_eq!("Quota 3 (5 ballots, 1 vacancies)",info.to_string());
    }
}
