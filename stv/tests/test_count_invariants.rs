// Copyright 2024 Andrew Conway.
// This file is part of ConcreteSTV.
// ConcreteSTV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSTV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSTV.  If not, see <https://www.gnu.org/licenses/>.

//! Check properties that should hold for any count, on lots of pseudo-random elections.

use std::collections::HashSet;
use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use droop_stv::ballot_metadata::CandidateId;
use droop_stv::ballot_pile::BallotPaperCount;
use droop_stv::distribution_of_preferences_transcript::ElectionReason;
use droop_stv::election_data::ElectionData;
use droop_stv::preference_distribution::distribute_preferences;
use droop_stv::tie_resolution::order_by_tally_then_name;

const NAMES : [&str;8] = ["Ada","Bea","Cy","Dot","Eve","Fay","Gus","Hal"];

fn random_election(rng:&mut ChaCha20Rng) -> ElectionData {
    let num_candidates = rng.random_range(1..=NAMES.len());
    let num_ballots = rng.random_range(0..60);
    let vacancies = rng.random_range(1..=5);
    let mut ballots = vec![];
    for _ in 0..num_ballots {
        let mut ballot : Vec<&str> = NAMES[..num_candidates].to_vec();
        ballot.shuffle(rng);
        // skew support towards the first few names.
        if rng.random_range(0..3)==0 { ballot.sort_by_key(|n|n.len()) }
        ballot.truncate(rng.random_range(1..=num_candidates));
        ballots.push(ballot);
    }
    ElectionData::from_preferences(ballots,vacancies).unwrap()
}

#[test]
fn test_invariants_on_random_elections() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..500 {
        let data = random_election(&mut rng);
        let transcript = distribute_preferences(&data);
        let candidates = data.candidates();
        assert_eq!(data.num_ballots().0/(data.vacancies()+1)+1,transcript.quota.quota);
        assert!(transcript.elected.len()<=data.vacancies());
        let elected : HashSet<&CandidateId> = transcript.elected.iter().collect();
        let eliminated : HashSet<&CandidateId> = transcript.eliminated.iter().collect();
        assert_eq!(elected.len(),transcript.elected.len(),"elected twice");
        assert_eq!(eliminated.len(),transcript.eliminated.len(),"excluded twice");
        assert!(elected.is_disjoint(&eliminated));
        assert!(transcript.counts.len()<=candidates.len());
        for count in &transcript.counts {
            assert!(!(count.elected.is_empty() && count.eliminated.is_empty()),"count {} did nothing",count.count);
            assert!(count.elected.is_empty() || count.eliminated.is_empty());
            let total : BallotPaperCount = count.tallies.iter().map(|(_,t)|*t).sum();
            assert_eq!(data.num_ballots(),total+count.exhausted);
            assert!(count.tallies.windows(2).all(|w|order_by_tally_then_name(&w[0],&w[1]).is_lt()));
            for e in &count.elected {
                if e.why==ElectionReason::ReachedQuota { assert!(e.votes.0>=transcript.quota.quota); }
                assert_eq!(e.votes.0.saturating_sub(transcript.quota.quota),e.surplus.0);
            }
        }
        if !transcript.all_vacancies_filled() {
            assert_eq!(candidates.len(),elected.len()+eliminated.len(),"count stopped with seats and candidates left");
        }
    }
}

#[test]
fn test_ballot_order_does_not_matter() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for _ in 0..100 {
        let data = random_election(&mut rng);
        let mut shuffled = data.ballots().to_vec();
        shuffled.shuffle(&mut rng);
        let shuffled = ElectionData::new(shuffled,data.vacancies()).unwrap();
        let original = distribute_preferences(&data);
        let reordered = distribute_preferences(&shuffled);
        assert_eq!(original.elected,reordered.elected);
        assert_eq!(original.eliminated,reordered.eliminated);
        assert_eq!(original.counts,reordered.counts);
    }
}
