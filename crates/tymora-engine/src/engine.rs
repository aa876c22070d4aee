//! The luck-roll computation: roll every entrant in order, classify, rank.

use crate::dice::{D20_SIDES, RollSource};
use crate::entrant::Entrant;
use crate::error::{LuckError, LuckResult};
use crate::report::{Classification, RollEntry, RollOutcome, RollReport, Standing};

/// Roll luck for every entrant, in order, and assemble the ranked report.
///
/// Each entrant draws exactly once from `source`; the total is the die plus
/// the entrant's modifier. Best and worst spots track the strictly highest
/// and strictly lowest totals, so on a tie the earlier entrant keeps the
/// spot. An empty entrant list yields an empty report without touching the
/// source. A source value outside 1..=20 aborts the whole run with
/// [`LuckError::InvalidRollOutcome`]; no partial report is returned.
pub fn compute_luck_rolls(
    entrants: Vec<Entrant>,
    source: &mut impl RollSource,
) -> LuckResult<RollReport> {
    let mut entries = Vec::with_capacity(entrants.len());
    let mut best: Option<Standing> = None;
    let mut worst: Option<Standing> = None;

    for entrant in entrants {
        let die_value = source.roll_d20();
        if !(1..=D20_SIDES).contains(&die_value) {
            return Err(LuckError::InvalidRollOutcome { value: die_value });
        }

        let total = i64::from(die_value) + i64::from(entrant.modifier);
        let classification = Classification::from_die(die_value);

        if best.as_ref().is_none_or(|b| total > b.total) {
            best = Some(Standing {
                name: entrant.name.clone(),
                total,
            });
        }
        if worst.as_ref().is_none_or(|w| total < w.total) {
            worst = Some(Standing {
                name: entrant.name.clone(),
                total,
            });
        }

        entries.push(RollEntry {
            entrant,
            outcome: RollOutcome {
                die_value,
                total,
                classification,
            },
        });
    }

    Ok(RollReport {
        entries,
        best,
        worst,
    })
}
