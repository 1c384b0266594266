// Copyright 2021-2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.


//! A simplified STV count with a Droop quota.
//!
//! Each count re-tallies the raw ballots, giving each to its most preferred continuing candidate.
//! Candidates at or above the quota are elected; if nobody is, all candidates on the lowest tally
//! are excluded. Surpluses are computed and reported but never transferred. The ballots of elected
//! and excluded candidates only move on to later preferences because the next tally skips anyone
//! no longer continuing.


use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use serde::{Serialize,Deserialize};
use tracing::{debug, info};
use crate::ballot_metadata::CandidateId;
use crate::ballot_pile::{BallotPaperCount, DistributedVotes};
use crate::distribution_of_preferences_transcript::{CandidateElected, CountIndex, ElectionReason, SingleCount, Transcript};
use crate::election_data::{ElectionData, InvalidElectionData};
use crate::quota::NumberOfVacancies;
use crate::tie_resolution::{tie_straddling_cut, TieNote, TieResolution};

/// What the count is doing at the moment.
///
/// ```text
/// Counting -> Electing | Eliminating -> Counting | Done
/// Done -> FillRemaining (only if vacancies remain)
/// ```
#[derive(Copy,Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub enum CountPhase {
    Counting,
    Electing,
    Eliminating,
    Done,
    FillRemaining,
}

impl Display for CountPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CountPhase::Counting => write!(f,"Counting"),
            CountPhase::Electing => write!(f,"Electing"),
            CountPhase::Eliminating => write!(f,"Eliminating"),
            CountPhase::Done => write!(f,"Done"),
            CountPhase::FillRemaining => write!(f,"FillRemaining"),
        }
    }
}

/// The class that does the count. All working state lives here for the duration of one count.
pub struct PreferenceDistributor<'a> {
    data : &'a ElectionData,
    quota : usize,
    continuing_candidates : HashSet<CandidateId>,
    phase : CountPhase,
    current_count : CountIndex,
    transcript : Transcript,
}

impl <'a> PreferenceDistributor<'a> {
    pub fn new(data : &'a ElectionData) -> Self {
        let quota = data.quota();
        PreferenceDistributor{
            data,
            quota : quota.quota,
            continuing_candidates : data.candidates().into_iter().collect(),
            phase : CountPhase::Counting,
            current_count : CountIndex(0),
            transcript : Transcript::new(quota),
        }
    }

    pub fn quota(&self) -> usize { self.quota }
    pub fn phase(&self) -> CountPhase { self.phase }
    pub fn continuing_candidates(&self) -> &HashSet<CandidateId> { &self.continuing_candidates }
    pub fn transcript(&self) -> &Transcript { &self.transcript }
    pub fn into_transcript(self) -> Transcript { self.transcript }

    pub fn remaining_to_elect(&self) -> NumberOfVacancies { self.data.vacancies().saturating_sub(self.transcript.elected.len()) }

    /// The count keeps going while there is someone to elect and someone to elect them from.
    pub fn should_continue(&self) -> bool { self.remaining_to_elect()>0 && !self.continuing_candidates.is_empty() }

    fn set_phase(&mut self,phase:CountPhase) {
        debug!(count=%self.current_count,from=%self.phase,to=%phase,"Phase change");
        self.phase=phase;
    }

    fn tally(&self) -> DistributedVotes { DistributedVotes::distribute(self.data.ballots(),&self.continuing_candidates) }

    fn declare_elected(&mut self,who:CandidateId,why:ElectionReason,votes:BallotPaperCount) -> CandidateElected {
        let surplus = BallotPaperCount(votes.0.saturating_sub(self.quota));
        match why {
            ElectionReason::ReachedQuota => info!(candidate=%who,votes=%votes,surplus=%surplus,"Elected"),
            ElectionReason::FilledRemainingVacancy => info!(candidate=%who,votes=%votes,"Elected to remaining vacancy"),
        }
        self.continuing_candidates.remove(&who);
        self.transcript.elected.push(who.clone());
        CandidateElected{ who, why, votes, surplus }
    }

    /// Elect everyone at or above quota, highest first, until there are no vacancies left.
    /// `sorted` must be in tally order.
    fn check_elected_by_quota(&mut self,sorted:&[(CandidateId,BallotPaperCount)]) -> (Vec<CandidateElected>,Option<TieNote>) {
        let mut elected = vec![];
        for (candidate,votes) in sorted {
            if self.remaining_to_elect()==0 || votes.0<self.quota { break; }
            elected.push(self.declare_elected(candidate.clone(),ElectionReason::ReachedQuota,*votes));
        }
        let tie = tie_straddling_cut(sorted,elected.len());
        (elected,tie)
    }

    /// Exclude every candidate on the lowest tally. A candidate nobody has given a ballot to yet
    /// is not excluded while someone else still holds ballots.
    fn exclude_lowest(&mut self,distributed:&DistributedVotes,sorted:&[(CandidateId,BallotPaperCount)]) -> (Vec<CandidateId>,Option<TieNote>) {
        let Some(lowest) = distributed.lowest_tally() else { return (vec![],None) };
        let losers : Vec<CandidateId> = sorted.iter().filter(|(_,t)|*t==lowest).map(|(c,_)|c.clone()).collect();
        let tie = if losers.len()>1 {
            debug!(count=%self.current_count,tally=%lowest,candidates=losers.len(),"Tie for lowest, excluding all");
            Some(TieNote{ affected: losers.clone(), tally: lowest, resolution: TieResolution::AllExcludedTogether })
        } else { None };
        for loser in &losers {
            info!(candidate=%loser,votes=%lowest,"Excluded");
            self.continuing_candidates.remove(loser);
            self.transcript.eliminated.push(loser.clone());
        }
        (losers,tie)
    }

    /// Do one count : tally, then elect by quota or exclude the lowest.
    pub fn do_one_count(&mut self) {
        self.set_phase(CountPhase::Counting);
        let distributed = self.tally();
        let sorted = distributed.sorted_by_tally();
        debug!(count=%self.current_count,continuing=sorted.len(),continuing_ballots=%distributed.num_continuing_ballots(),exhausted=%distributed.exhausted,"Tallied");
        self.set_phase(CountPhase::Electing);
        let (elected,election_tie) = self.check_elected_by_quota(&sorted);
        let mut ties : Vec<TieNote> = election_tie.into_iter().collect();
        let mut eliminated = vec![];
        if elected.is_empty() {
            self.set_phase(CountPhase::Eliminating);
            let (losers,exclusion_tie) = self.exclude_lowest(&distributed,&sorted);
            eliminated=losers;
            ties.extend(exclusion_tie);
        }
        self.end_of_count_step(sorted,distributed.exhausted,elected,eliminated,ties);
    }

    fn end_of_count_step(&mut self,tallies:Vec<(CandidateId,BallotPaperCount)>,exhausted:BallotPaperCount,elected:Vec<CandidateElected>,eliminated:Vec<CandidateId>,ties:Vec<TieNote>) {
        self.transcript.counts.push(SingleCount{ count: self.current_count, tallies, exhausted, elected, eliminated, ties });
        self.current_count=CountIndex(self.current_count.0+1);
    }

    /// Candidates have run out before vacancies. Elect the best of whoever is left, without a quota.
    /// Does nothing if nobody is left.
    pub fn fill_remaining_vacancies(&mut self) {
        if self.remaining_to_elect()==0 || self.continuing_candidates.is_empty() { return; }
        self.set_phase(CountPhase::FillRemaining);
        let distributed = self.tally();
        let sorted = distributed.sorted_by_tally();
        let mut elected = vec![];
        for (candidate,votes) in &sorted {
            if self.remaining_to_elect()==0 { break; }
            elected.push(self.declare_elected(candidate.clone(),ElectionReason::FilledRemainingVacancy,*votes));
        }
        let ties : Vec<TieNote> = tie_straddling_cut(&sorted,elected.len()).into_iter().collect();
        self.end_of_count_step(sorted,distributed.exhausted,elected,vec![],ties);
    }

    pub fn go(&mut self) {
        self.data.log_summary();
        while self.should_continue() {
            self.do_one_count();
        }
        self.set_phase(CountPhase::Done);
        self.fill_remaining_vacancies();
    }
}

/// Run a full count, returning the transcript.
pub fn distribute_preferences(data:&ElectionData) -> Transcript {
    let mut work = PreferenceDistributor::new(data);
    work.go();
    work.into_transcript()
}

/// Count ballots given as lists of candidate names, most preferred first, returning who was elected in order.
///
/// ```
/// use droop_stv::preference_distribution::count_election;
/// let ballots = vec![vec!["A","B"],vec!["A","C"],vec!["A"],vec!["B"],vec!["C","B"]];
/// let elected = count_election(ballots,1).unwrap();
/// assert_eq!(vec!["A"],elected.iter().map(|c|c.name()).collect::<Vec<_>>());
/// ```
pub fn count_election<S:Into<CandidateId>>(ballots:impl IntoIterator<Item=Vec<S>>,vacancies:NumberOfVacancies) -> Result<Vec<CandidateId>,InvalidElectionData> {
    let data = ElectionData::from_preferences(ballots,vacancies)?;
    Ok(distribute_preferences(&data).elected)
}
