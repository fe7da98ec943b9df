use crate::selectors::{Constraint, SelectorChain};
use crate::tokenizer::{Attributes, StartTag};
use cfg_if::cfg_if;

#[derive(Debug)]
pub struct StepMatch {
    pub depth: usize,
    pub attributes: Attributes,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Scanning,
    /// The whole chain has matched the element opened at `depth`.
    Capturing { depth: usize, occurrence: usize },
    /// An anchored chain didn't match the first tag of the document.
    Stopped,
}

/// Per-run match bookkeeping.
///
/// `matched[i]` holds the match of the `i`-th step. Steps are only ever tried
/// in chain order, so the matched steps always form a prefix of the chain and
/// the last entry is the innermost match.
#[derive(Debug)]
pub struct MatchState {
    matched: Vec<StepMatch>,
    depth: usize,
    phase: Phase,
    occurrences: usize,
}

impl MatchState {
    pub fn new(chain_len: usize) -> Self {
        MatchState {
            matched: Vec::with_capacity(chain_len),
            depth: 0,
            phase: Phase::Scanning,
            occurrences: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    #[inline]
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Stops the run for good if the chain is anchored and the incoming
    /// top-level tag isn't the anchor. Returns `true` if the run is stopped.
    pub fn check_anchor(&mut self, chain: &SelectorChain, name: &str) -> bool {
        if self.phase == Phase::Stopped {
            return true;
        }

        let anchor_mismatch = self.depth == 0
            && self.phase == Phase::Scanning
            && chain
                .steps()
                .first()
                .is_some_and(|s| s.constraint() == Constraint::Anchor && !s.tag().matches(name));

        if anchor_mismatch {
            trace!(@match "`{}` doesn't match the anchor, stopping", name);
            self.phase = Phase::Stopped;
        }

        anchor_mismatch
    }

    #[inline]
    fn parent_depth(&self, step_idx: usize) -> usize {
        step_idx
            .checked_sub(1)
            .and_then(|idx| self.matched.get(idx))
            .map_or(0, |m| m.depth)
    }

    /// Tries the first unmatched step against the tag at the current depth.
    /// Returns `true` if the step matched and it was the last one of the chain.
    pub fn try_advance(&mut self, chain: &SelectorChain, tag: &StartTag<'_>) -> bool {
        let step_idx = self.matched.len();

        let Some(step) = chain.steps().get(step_idx) else {
            return false;
        };

        let position_holds = match step.constraint() {
            Constraint::Descendant => true,
            Constraint::Anchor => self.depth == 1,
            Constraint::DirectChild => self.parent_depth(step_idx) + 1 == self.depth,
        };

        if !position_holds || !step.matches(tag.name(), tag.attributes()) {
            self.rollback(chain);

            return false;
        }

        trace!(@match "step #{} matched `{}` at depth {}", step_idx, tag.name(), self.depth);

        self.matched.push(StepMatch {
            depth: self.depth,
            attributes: tag.attributes().clone(),
        });

        if self.matched.len() == chain.len() {
            self.phase = Phase::Capturing {
                depth: self.depth,
                occurrence: self.occurrences,
            };

            self.occurrences += 1;

            true
        } else {
            false
        }
    }

    /// Clears direct-child matches whose link to the previous step no longer
    /// holds, innermost first, stopping at the first step that isn't a direct
    /// child or whose link is intact.
    ///
    /// With balanced start and end events [`close_current`] already unwinds a
    /// step as soon as its element ends, so every remaining link holds and
    /// this is a no-op. It only fires on depth bookkeeping that skipped an
    /// end, as driven directly through `leave`.
    ///
    /// [`close_current`]: MatchState::close_current
    fn rollback(&mut self, chain: &SelectorChain) {
        while let Some(step_idx) = self.matched.len().checked_sub(1) {
            if chain.steps()[step_idx].constraint() != Constraint::DirectChild {
                break;
            }

            let depth = self.matched[step_idx].depth;
            let linked = depth == self.parent_depth(step_idx) + 1 && depth < self.depth;

            if linked {
                break;
            }

            trace!(@match "step #{} lost its parent link", step_idx);
            self.matched.pop();
        }
    }

    /// Handles the end of the element at the current depth.
    ///
    /// Returns the finished occurrence with the final step's attributes if the
    /// element was the captured one.
    pub fn close_current(&mut self) -> Option<(usize, Attributes)> {
        if self.matched.last().map(|m| m.depth) != Some(self.depth) {
            return None;
        }

        let step_match = self.matched.pop()?;

        match self.phase {
            Phase::Capturing { depth, occurrence } if depth == self.depth => {
                trace!(@match "occurrence #{} finished at depth {}", occurrence, depth);
                self.phase = Phase::Scanning;

                Some((occurrence, step_match.attributes))
            }
            _ => {
                trace!(@match "step #{} unmatched at depth {}", self.matched.len(), self.depth);
                None
            }
        }
    }

    #[inline]
    pub fn is_capturing(&self) -> bool {
        matches!(self.phase, Phase::Capturing { .. })
    }

    #[cfg(test)]
    pub fn matched_len(&self) -> usize {
        self.matched.len()
    }
}

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        impl MatchState {
            pub fn trace(&self) {
                let depths: Vec<_> = self.matched.iter().map(|m| m.depth).collect();

                println!(
                    "@match_state: depth={} matched_depths={:?} phase={:?}",
                    self.depth, depths, self.phase
                );
            }
        }
    } else {
        impl MatchState {
            #[inline]
            pub fn trace(&self) {}
        }
    }
}
