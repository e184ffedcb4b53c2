use crate::Result;
use std::collections::HashMap;

/// A trusted period and the height it projects for the requested count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extrapolation {
    pub period: i64,
    pub height_per_period: i64,
    /// Iteration at which the projection was made.
    pub from_iteration: i64,
    pub from_height: i64,
    pub height: i64,
}

/// Watches (fingerprint, height) after every settled shape and, once the
/// same gap between repeated fingerprints has been seen often enough,
/// projects the final height without simulating the rest.
pub struct CycleDetector {
    target_iteration: i64,
    threshold: u32,
    ledger: HashMap<u64, (i64, i64)>,
    candidate: Option<i64>,
    confirmations: u32,
    confirmed: Option<(i64, i64)>,
}

impl CycleDetector {
    /// `requested` is the total number of shapes; the last one has index
    /// `requested - 1`.
    pub fn new(requested: i64, threshold: u32) -> CycleDetector {
        CycleDetector {
            target_iteration: requested - 1,
            threshold,
            ledger: HashMap::new(),
            candidate: None,
            confirmations: 0,
            confirmed: None,
        }
    }

    pub fn candidate(&self) -> Option<i64> {
        self.candidate
    }

    pub fn confirmations(&self) -> u32 {
        self.confirmations
    }

    /// Period and height gain once trusted.
    pub fn confirmed(&self) -> Option<(i64, i64)> {
        self.confirmed
    }

    pub fn observe(
        &mut self,
        iteration: i64,
        fingerprint: u64,
        height: i64,
    ) -> Result<Option<Extrapolation>> {
        if let Some((period, gain)) = self.confirmed {
            return self.project(iteration, height, period, gain);
        }

        let (previous_iteration, previous_height) = match self.ledger.get(&fingerprint) {
            Some(seen) => *seen,
            None => {
                self.ledger.insert(fingerprint, (iteration, height));
                self.candidate = None;
                self.confirmations = 0;
                return Ok(None);
            }
        };
        if iteration <= previous_iteration {
            anyhow::bail!(
                "shape {} observed after shape {} for fingerprint {}",
                iteration,
                previous_iteration,
                fingerprint
            );
        }
        self.ledger.insert(fingerprint, (iteration, height));

        let gap = iteration - previous_iteration;
        let gain = height - previous_height;

        match self.candidate {
            None => {
                log::debug!("candidate period {} at shape {}", gap, iteration);
                self.candidate = Some(gap);
                self.confirmations = 1;
            }
            Some(period) if period == gap => {
                self.confirmations += 1;
            }
            Some(period) => {
                log::debug!(
                    "discarding candidate period {} after {} confirmations, saw gap {}",
                    period,
                    self.confirmations,
                    gap
                );
                self.candidate = None;
                self.confirmations = 0;
                return Ok(None);
            }
        }

        if self.confirmations < self.threshold {
            return Ok(None);
        }

        log::info!(
            "period {} confirmed at shape {}: +{} height per period",
            gap,
            iteration,
            gain
        );
        self.confirmed = Some((gap, gain));
        self.project(iteration, height, gap, gain)
    }

    fn project(
        &self,
        iteration: i64,
        height: i64,
        period: i64,
        gain: i64,
    ) -> Result<Option<Extrapolation>> {
        if iteration > self.target_iteration
            || iteration % period != self.target_iteration % period
        {
            return Ok(None);
        }

        let remaining = self.target_iteration - iteration;
        if remaining % period != 0 {
            anyhow::bail!(
                "{} remaining shapes are not a whole number of {}-shape periods",
                remaining,
                period
            );
        }

        let projected = (remaining / period)
            .checked_mul(gain)
            .and_then(|h| h.checked_add(height))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "extrapolated height overflows: {} periods of +{} from {}",
                    remaining / period,
                    gain,
                    height
                )
            })?;

        Ok(Some(Extrapolation {
            period,
            height_per_period: gain,
            from_iteration: iteration,
            from_height: height,
            height: projected,
        }))
    }
}
