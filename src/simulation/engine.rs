//! Household benefit simulation engine
//!
//! Produces the full year-by-year benefit stream for one claiming strategy.
//! Each claimant moves through NotYetClaiming -> Claiming -> (Deceased |
//! SurvivorClaiming) on their own age axis; the two axes advance in lockstep
//! on a shared calendar and records carry the primary claimant's age.
//!
//! Survivor policy: when one claimant dies, a survivor who is already
//! claiming receives the larger of the two ongoing streams from that year on.
//! A survivor who has not yet claimed receives nothing until their own
//! claiming age. This mirrors the product's documented behavior; real-world
//! rules can allow earlier survivor claiming, so the policy is kept in one
//! place here rather than spread across the loop.

use log::debug;

use crate::assumptions::constants::{MAX_CLAIMING_AGE, MIN_CLAIMING_AGE};
use crate::assumptions::{claiming_multiplier, project_to_claiming_age, spousal};
use crate::error::OptimizerError;
use crate::household::{Claimant, HouseholdParams};
use crate::tax;

use super::state::{ClaimantPhase, ClaimantTrack};
use super::stream::{ClaimingStrategy, YearlyBenefitRecord};

/// Reject claiming ages outside the claimable range rather than clamping
fn ensure_claimable(age: f64) -> Result<(), OptimizerError> {
    if (MIN_CLAIMING_AGE..=MAX_CLAIMING_AGE).contains(&age) {
        Ok(())
    } else {
        Err(OptimizerError::ClaimingAgeOutOfRange {
            age,
            min: MIN_CLAIMING_AGE,
            max: MAX_CLAIMING_AGE,
        })
    }
}

/// Year-by-year simulator for one household's claiming strategies
pub struct HouseholdBenefitSimulator {
    params: HouseholdParams,
}

impl HouseholdBenefitSimulator {
    pub fn new(params: HouseholdParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HouseholdParams {
        &self.params
    }

    /// Resolve a claimant's monthly amount at their claim: COLA-project the
    /// reference benefit to the claiming age, apply the age adjustment, then
    /// take the larger of own and spousal benefit when married.
    fn track_for(
        &self,
        claimant: &Claimant,
        partner: Option<&Claimant>,
        claiming_age: f64,
    ) -> ClaimantTrack {
        let cola = self.params.cola_rate;
        let own = project_to_claiming_age(claimant.base_pia, claimant.current_age, claiming_age, cola)
            * claiming_multiplier(claiming_age, claimant.reference_age);

        let monthly_at_claim = match partner {
            Some(partner) => {
                // Partner's reference amount grows with the same calendar
                // years of COLA before this claimant's claim
                let partner_reference = project_to_claiming_age(
                    partner.base_pia,
                    claimant.current_age,
                    claiming_age,
                    cola,
                );
                spousal::resolve(own, partner_reference, claiming_age, claimant.reference_age)
                    .payable()
            }
            None => own,
        };

        ClaimantTrack {
            claiming_age,
            monthly_at_claim,
            life_expectancy_age: claimant.life_expectancy_age,
        }
    }

    /// Simulate one strategy. `spouse_claiming_age` is required for married
    /// households and ignored for single ones.
    ///
    /// A life expectancy below the current age yields an empty stream and
    /// zero totals; it is a legitimate degenerate input, not an error.
    pub fn simulate(
        &self,
        primary_claiming_age: f64,
        spouse_claiming_age: Option<f64>,
    ) -> Result<ClaimingStrategy, OptimizerError> {
        ensure_claimable(primary_claiming_age)?;

        let primary = &self.params.primary;
        let spouse = if self.params.is_married {
            match self.params.spouse.as_ref() {
                Some(s) => Some(s),
                None => return Err(OptimizerError::MissingSpouseData),
            }
        } else {
            None
        };

        let spouse_track = match spouse {
            Some(s) => {
                let age = spouse_claiming_age.ok_or(OptimizerError::MissingSpouseData)?;
                ensure_claimable(age)?;
                Some(self.track_for(s, Some(primary), age))
            }
            None => None,
        };
        let primary_track = self.track_for(primary, spouse, primary_claiming_age);

        let cola = self.params.cola_rate;
        let spouse_offset = spouse.map_or(0.0, |s| s.current_age - primary.current_age);
        let horizon_alive = |primary_age: f64| {
            primary.alive_at(primary_age)
                || spouse.is_some_and(|s| s.alive_at(primary_age + spouse_offset))
        };

        let mut records: Vec<YearlyBenefitRecord> = Vec::new();
        let mut cumulative = 0.0;
        let mut after_tax_total = 0.0;
        let mut survivor_active = false;

        let mut age = primary.current_age;
        while horizon_alive(age) {
            let spouse_age = age + spouse_offset;
            let spouse_deceased = spouse.is_some() && !spouse.is_some_and(|s| s.alive_at(spouse_age));
            let primary_deceased = !primary.alive_at(age);

            let primary_phase = primary_track.phase_at(age, spouse_deceased);
            let mut primary_benefit = match primary_phase {
                ClaimantPhase::Claiming | ClaimantPhase::SurvivorClaiming => {
                    primary_track.own_annual_benefit(age, cola)
                }
                ClaimantPhase::NotYetClaiming | ClaimantPhase::Deceased => 0.0,
            };

            let spouse_phase = spouse_track
                .as_ref()
                .map(|t| t.phase_at(spouse_age, primary_deceased));
            let mut spouse_benefit = match (spouse_track.as_ref(), spouse_phase) {
                (Some(t), Some(ClaimantPhase::Claiming | ClaimantPhase::SurvivorClaiming)) => {
                    t.own_annual_benefit(spouse_age, cola)
                }
                _ => 0.0,
            };

            // Survivor transition: the survivor's benefit becomes the larger
            // of the two ongoing streams, each compounded from its own claim
            // year. Applies only once the survivor is claiming, and only if
            // the deceased had actually claimed before death.
            if let Some(st) = spouse_track.as_ref() {
                if primary_phase == ClaimantPhase::SurvivorClaiming && st.claimed_before_death() {
                    primary_benefit = primary_benefit.max(st.ongoing_stream(spouse_age, cola));
                    survivor_active = true;
                } else if spouse_phase == Some(ClaimantPhase::SurvivorClaiming)
                    && primary_track.claimed_before_death()
                {
                    spouse_benefit = spouse_benefit.max(primary_track.ongoing_stream(age, cola));
                    survivor_active = true;
                }
            }

            let total_benefit = primary_benefit + spouse_benefit;
            cumulative += total_benefit;
            let after_tax = tax::after_tax_benefit(
                total_benefit,
                self.params.other_annual_income,
                self.params.filing_status,
                self.params.tax_rule.as_ref(),
            );
            after_tax_total += after_tax;

            records.push(YearlyBenefitRecord {
                age,
                primary_benefit,
                spouse_benefit,
                total_benefit,
                cumulative_benefit: cumulative,
                after_tax_benefit: after_tax,
                is_survivor_active: survivor_active,
            });

            age += 1.0;
        }

        debug!(
            "simulated strategy primary@{primary_claiming_age} spouse@{spouse_claiming_age:?}: \
             {} years, lifetime {cumulative:.0}",
            records.len()
        );

        let spouse_monthly = spouse_track.as_ref().map_or(0.0, |t| t.monthly_at_claim);
        let combined_monthly = primary_track.monthly_at_claim + spouse_monthly;

        let mut strategy = ClaimingStrategy {
            name: "Custom".to_string(),
            description: String::new(),
            primary_claiming_age,
            spouse_claiming_age: spouse_track.as_ref().map(|t| t.claiming_age),
            primary_monthly_at_claim: primary_track.monthly_at_claim,
            spouse_monthly_at_claim: spouse_monthly,
            combined_monthly_at_claim: combined_monthly,
            annual_benefit_at_claim: combined_monthly * 12.0,
            lifetime_benefits: cumulative,
            after_tax_lifetime_benefits: after_tax_total,
            break_even_age: 0.0,
            benefits_by_age: records,
        };
        strategy.finalize_cents();
        Ok(strategy)
    }
}
