// Copyright 2021-2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.


//! Store the history of the distribution of preferences


use std::fmt::{Display, Formatter};
use crate::ballot_pile::BallotPaperCount;
use crate::ballot_metadata::{CandidateId, CandidateStatus};
use crate::quota::QuotaInfo;
use crate::tie_resolution::TieNote;
use serde::{Serialize,Deserialize};



/// The index of a count. 0 means the first. The human readable count number is one more.
#[derive(Copy,Clone,Debug,Ord, PartialOrd, Eq, PartialEq,Hash,Serialize,Deserialize)]
pub struct CountIndex(pub usize);

impl Display for CountIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f,"{}",self.0+1) }
}

#[derive(Copy, Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub enum ElectionReason {
    ReachedQuota,
    /// Candidates ran out before the vacancies did, and this candidate was the best of those remaining.
    FilledRemainingVacancy,
}

#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct CandidateElected {
    pub who : CandidateId,
    pub why : ElectionReason,
    /// tally at the time of election.
    pub votes : BallotPaperCount,
    /// votes in excess of the quota. This is reported, not transferred.
    pub surplus : BallotPaperCount,
}

#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct SingleCount {
    pub count : CountIndex,
    /// tallies for each continuing candidate at the start of this count, highest first.
    pub tallies : Vec<(CandidateId,BallotPaperCount)>,
    /// ballots with no continuing candidate on them.
    pub exhausted : BallotPaperCount,
    /// Who, if anyone, was elected in this count.
    pub elected : Vec<CandidateElected>,
    /// Who, if anyone, was excluded in this count.
    pub eliminated : Vec<CandidateId>,
    /// Ties that affected this count.
    #[serde(skip_serializing_if = "Vec::is_empty",default)]
    pub ties : Vec<TieNote>,
}

#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct Transcript {
    pub quota : QuotaInfo,
    pub counts : Vec<SingleCount>,
    /// in order of election.
    pub elected : Vec<CandidateId>,
    /// in order of exclusion.
    pub eliminated : Vec<CandidateId>,
}

impl Transcript {
    pub fn new(quota:QuotaInfo) -> Self {
        Transcript{ quota, counts: vec![], elected: vec![], eliminated: vec![] }
    }

    pub fn candidate_status(&self,candidate:&CandidateId) -> CandidateStatus {
        if self.elected.contains(candidate) { CandidateStatus::Elected }
        else if self.eliminated.contains(candidate) { CandidateStatus::Eliminated }
        else if self.counts.iter().any(|c|c.tallies.iter().any(|(who,_)|who==candidate)) { CandidateStatus::Continuing }
        else { CandidateStatus::NotStanding }
    }

    /// Whether all vacancies were filled.
    pub fn all_vacancies_filled(&self) -> bool { self.elected.len()==self.quota.vacancies }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f,"{}",self.quota)?;
        for count in &self.counts {
            write!(f,"Count {} :",count.count)?;
            for (who,tally) in &count.tallies { write!(f," {}={}",who,tally)?; }
            write!(f," exhausted={}",count.exhausted)?;
            for e in &count.elected {
                match e.why {
                    ElectionReason::ReachedQuota => write!(f," ; {} elected with {} votes (surplus {})",e.who,e.votes,e.surplus)?,
                    ElectionReason::FilledRemainingVacancy => write!(f," ; {} elected to a remaining vacancy",e.who)?,
                }
            }
            for who in &count.eliminated { write!(f," ; {} excluded",who)?; }
            for tie in &count.ties { write!(f," ; {}",tie)?; }
            writeln!(f)?;
        }
        write!(f,"Elected : {}",self.elected.iter().map(|c|c.to_string()).collect::<Vec<_>>().join(", "))
    }
}
