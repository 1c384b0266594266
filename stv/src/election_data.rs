// Copyright 2021-2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.


//! The ballots and vacancies for a contest, checked before counting.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use serde::{Deserialize,Serialize};
use thiserror::Error;
use tracing::info;
use crate::ballot_metadata::CandidateId;
use crate::ballot_paper::RankedBallot;
use crate::ballot_pile::BallotPaperCount;
use crate::quota::{NumberOfVacancies, QuotaInfo};

/// Reasons the ballots and vacancies can't be counted. These are the caller's problem,
/// the count itself never fails.
#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum InvalidElectionData {
    #[error("There must be at least one vacancy to fill.")]
    NoVacancies,
    #[error("Ballot #{ballot} has no preferences on it.")]
    EmptyBallot{ ballot : usize },
    #[error("Ballot #{ballot} has an empty candidate name at preference {position}.")]
    EmptyCandidateName{ ballot : usize, position : usize },
}

/// Ballots and the number of candidates to elect. Validated on construction.
#[derive(Debug,Serialize,Clone)]
pub struct ElectionData {
    ballots : Vec<RankedBallot>,
    vacancies : NumberOfVacancies,
}

impl ElectionData {
    pub fn new(ballots:Vec<RankedBallot>,vacancies:NumberOfVacancies) -> Result<Self,InvalidElectionData> {
        if vacancies==0 { return Err(InvalidElectionData::NoVacancies); }
        for (index,vote) in ballots.iter().enumerate() {
            let ballot = index+1; // human readable, as a spreadsheet row would be
            if vote.is_empty() { return Err(InvalidElectionData::EmptyBallot{ballot}); }
            if let Some(position) = vote.preferences.iter().position(|c|c.name().trim().is_empty()) {
                return Err(InvalidElectionData::EmptyCandidateName{ballot,position:position+1});
            }
        }
        Ok(ElectionData{ballots,vacancies})
    }

    /// Convenience for ballots straight from some reader, each a list of names, most preferred first.
    pub fn from_preferences<S:Into<CandidateId>>(ballots:impl IntoIterator<Item=Vec<S>>,vacancies:NumberOfVacancies) -> Result<Self,InvalidElectionData> {
        ElectionData::new(ballots.into_iter().map(|prefs|RankedBallot::new(prefs)).collect(),vacancies)
    }

    pub fn ballots(&self) -> &[RankedBallot] { &self.ballots }
    pub fn vacancies(&self) -> NumberOfVacancies { self.vacancies }
    pub fn num_ballots(&self) -> BallotPaperCount { BallotPaperCount(self.ballots.len()) }

    /// Every distinct candidate mentioned on any ballot, sorted by name.
    pub fn candidates(&self) -> BTreeSet<CandidateId> {
        self.ballots.iter().flat_map(|b|b.preferences.iter().cloned()).collect()
    }

    pub fn quota(&self) -> QuotaInfo { QuotaInfo::compute(self.num_ballots(),self.vacancies) }

    pub fn summary(&self) -> ElectionSummary {
        ElectionSummary{
            ballots: self.num_ballots(),
            candidates: self.candidates().into_iter().collect(),
            vacancies: self.vacancies,
            quota: self.quota().quota,
        }
    }

    pub fn log_summary(&self) {
        let summary = self.summary();
        info!(ballots=%summary.ballots,vacancies=summary.vacancies,quota=summary.quota,candidates=summary.candidates.len(),"Election summary");
    }
}

/// Overview of an election before counting starts.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct ElectionSummary {
    pub ballots : BallotPaperCount,
    pub candidates : Vec<CandidateId>,
    pub vacancies : NumberOfVacancies,
    pub quota : usize,
}

impl Display for ElectionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f,"Total ballots: {}",self.ballots)?;
        writeln!(f,"Quota for election: {}",self.quota)?;
        write!(f,"Candidates: {}",self.candidates.iter().map(|c|c.to_string()).collect::<Vec<_>>().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::{ElectionData, InvalidElectionData};
    use crate::ballot_metadata::CandidateId;
    use crate::ballot_pile::BallotPaperCount;

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(Some(InvalidElectionData::NoVacancies),ElectionData::from_preferences(vec![vec!["A"]],0).err());
        assert_eq!(Some(InvalidElectionData::EmptyBallot{ballot:2}),ElectionData::from_preferences(vec![vec!["A"],vec![]],1).err());
        assert_eq!(Some(InvalidElectionData::EmptyCandidateName{ballot:1,position:2}),ElectionData::from_preferences(vec![vec!["A"," "]],1).err());
        assert_eq!("Ballot #2 has no preferences on it.",InvalidElectionData::EmptyBallot{ballot:2}.to_string());
    }

    #[test]
    fn test_summary() {
        let data = ElectionData::from_preferences(vec![vec!["B","A"],vec!["C"],vec!["A"]],1).unwrap();
        let summary = data.summary();
        assert_eq!(BallotPaperCount(3),summary.ballots);
        assert_eq!(vec![CandidateId::from("A"),CandidateId::from("B"),CandidateId::from("C")],summary.candidates);
        assert_eq!(2,summary.quota);
        assert_eq!("Total ballots: 3\nQuota for election: 2\nCandidates: A, B, C",summary.to_string());
    }

    #[test]
    fn test_no_ballots_is_fine() {
        let data = ElectionData::from_preferences(Vec::<Vec<&str>>::new(),3).unwrap();
        assert!(data.candidates().is_empty());
        assert_eq!(1,data.quota().quota);
    }
}
