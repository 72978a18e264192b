use crate::trip::Trip;

/// Where the classifier currently believes the traveler is within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Legs before the first departure from home.
    #[default]
    Skip,
    /// Left home, not yet at the cabin.
    ToCabin,
    /// Based at the cabin, driving locally.
    AtCabin,
    /// Left the cabin, on the way home.
    Returning,
    /// Back home. Nothing more is consumed from the group.
    Done,
}

/// Which part of a visit a leg is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    Outbound,
    AtCabin,
    Return,
}

/// Read-only view of a group with the anchors and the look-ahead table.
pub(crate) struct Context<'a> {
    pub home: &'a str,
    pub cabin: &'a str,
    legs: &'a [Trip],
    // next_key[i] is the first index >= i whose leg ends at home or cabin
    next_key: Vec<Option<usize>>,
}

impl<'a> Context<'a> {
    pub fn new(legs: &'a [Trip], home: &'a str, cabin: &'a str) -> Self {
        let mut next_key = vec![None; legs.len()];
        let mut next = None;
        for (i, leg) in legs.iter().enumerate().rev() {
            if leg.ends_at(home) || leg.ends_at(cabin) {
                next = Some(i);
            }
            next_key[i] = next;
        }
        Self {
            home,
            cabin,
            legs,
            next_key,
        }
    }

    /// The first leg at or after `index` that lands at home or at the cabin.
    pub fn next_key_stop(&self, index: usize) -> Option<&'a Trip> {
        let key = self.next_key.get(index).copied().flatten()?;
        Some(&self.legs[key])
    }
}

impl State {
    /// Classifies the leg at `index` and returns the segment it belongs to,
    /// if any, together with the state for the following leg.
    pub(crate) fn step(self, leg: &Trip, index: usize, ctx: &Context) -> (Option<Segment>, State) {
        match self {
            State::Skip if leg.starts_at(ctx.home) => (Some(Segment::Outbound), outbound(leg, ctx)),
            State::Skip => (None, State::Skip),
            State::ToCabin => (Some(Segment::Outbound), outbound(leg, ctx)),
            State::AtCabin if leg.starts_at(ctx.cabin) && leg.ends_at(ctx.home) => {
                (Some(Segment::Return), State::Done)
            }
            State::AtCabin if leg.starts_at(ctx.cabin) && !leg.ends_at(ctx.cabin) => {
                match ctx.next_key_stop(index) {
                    Some(key) if key.ends_at(ctx.home) => {
                        (Some(Segment::Return), State::Returning)
                    }
                    _ => (Some(Segment::AtCabin), State::AtCabin),
                }
            }
            State::AtCabin if !leg.starts_at(ctx.home) && !leg.ends_at(ctx.home) => {
                (Some(Segment::AtCabin), State::AtCabin)
            }
            // Touches home without coming from the cabin, nothing to attribute it to
            State::AtCabin => (None, State::AtCabin),
            State::Returning if leg.ends_at(ctx.home) => (Some(Segment::Return), State::Done),
            State::Returning => (Some(Segment::Return), State::Returning),
            State::Done => (None, State::Done),
        }
    }
}

fn outbound(leg: &Trip, ctx: &Context) -> State {
    if leg.ends_at(ctx.cabin) {
        State::AtCabin
    } else {
        State::ToCabin
    }
}
