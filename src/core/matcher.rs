use crate::domain::model::{Assignment, Participant, PriorAssignments, Roster};
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Draws a full set of pairings: every participant gives to exactly one other
/// participant and receives from exactly one, nobody keeps their own name,
/// and nobody is handed the same receiver as in the previous round.
///
/// The draw is a single randomized greedy pass. Givers are processed in
/// shuffled order and each picks uniformly among the receivers still
/// unclaimed, minus themselves and their prior receiver. There is no
/// backtracking: an early pick can strand a later giver with zero candidates,
/// in which case the whole draw fails even though a valid matching may exist
/// graph-theoretically. Callers wanting a higher success rate re-run with a
/// fresh shuffle; the matcher itself never retries and never returns a
/// partial result.
pub fn draw<R: Rng + ?Sized>(
    roster: &Roster,
    prior: &PriorAssignments,
    rng: &mut R,
) -> Result<Vec<Assignment>> {
    let mut givers: Vec<&Participant> = roster.participants().iter().collect();
    givers.shuffle(rng);

    let mut available: HashSet<&str> = roster
        .participants()
        .iter()
        .map(|p| p.email.as_str())
        .collect();
    let mut assignments = Vec::with_capacity(givers.len());

    for giver in givers {
        let forbidden = prior.receiver_for(&giver.email);
        // Enumerate in roster order rather than set order so a seeded rng
        // reproduces the same draw.
        let candidates: Vec<&Participant> = roster
            .participants()
            .iter()
            .filter(|p| {
                available.contains(p.email.as_str())
                    && p.email != giver.email
                    && Some(p.email.as_str()) != forbidden
            })
            .collect();

        let receiver = candidates
            .choose(rng)
            .copied()
            .ok_or(SantaError::MatchingExhausted)?;

        available.remove(receiver.email.as_str());
        assignments.push(Assignment {
            giver: giver.clone(),
            receiver: receiver.clone(),
        });
    }

    Ok(assignments)
}
