//! Incremental-build bookkeeping.
//!
//! A build gathers everything that can invalidate a stage into
//! [`BuildInputs`], asks [`BuildState::stale`] for each stage in order, and
//! finally replaces the state with [`BuildState::commit`]. Which trigger
//! invalidates which stage is data in [`DEPENDENCIES`], not scattered
//! comparisons.

use std::fmt;

use super::spec::{AxisPosition, TickFlags, TickLocation};
use crate::stamp::Stamp;
use crate::types::{DisplayBox, ValueRange};

/// One gated step of a build, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The whole build; stale means "do anything at all"
    Axis,
    Ticks,
    Lines,
    Labels,
    Labels2D,
    Title,
    Title2D,
}

/// A reason a stage may need rebuilding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Force,
    ActorModified,
    ViewportModified,
    BoundsModified,
    LabelTextModified,
    TitleTextModified,
    PositionChanged,
    TickLocationChanged,
    RangeChanged,
    TickFlagsChanged,
    /// Hidden at the last build, visible now
    LabelsShown,
    TitleShown,
    /// Switched between 2D and 3D text
    ModeChanged,
    DisplayBoundsChanged,
    TicksRebuilt,
    TitleRebuilt,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trigger::Force => "force",
            Trigger::ActorModified => "actor modified",
            Trigger::ViewportModified => "viewport modified",
            Trigger::BoundsModified => "bounds modified",
            Trigger::LabelTextModified => "label text modified",
            Trigger::TitleTextModified => "title text modified",
            Trigger::PositionChanged => "axis position changed",
            Trigger::TickLocationChanged => "tick location changed",
            Trigger::RangeChanged => "range changed",
            Trigger::TickFlagsChanged => "tick flags changed",
            Trigger::LabelsShown => "labels shown",
            Trigger::TitleShown => "title shown",
            Trigger::ModeChanged => "2D mode toggled",
            Trigger::DisplayBoundsChanged => "projected bounds changed",
            Trigger::TicksRebuilt => "ticks rebuilt",
            Trigger::TitleRebuilt => "title rebuilt",
        };
        f.write_str(s)
    }
}

/// Which triggers invalidate which stage.
pub const DEPENDENCIES: [(Stage, &[Trigger]); 7] = [
    (Stage::Axis, &[Trigger::Force, Trigger::ActorModified, Trigger::ViewportModified]),
    (
        Stage::Ticks,
        &[
            Trigger::Force,
            Trigger::PositionChanged,
            Trigger::TickLocationChanged,
            Trigger::BoundsModified,
        ],
    ),
    (
        Stage::Lines,
        &[
            Trigger::Force,
            Trigger::TicksRebuilt,
            Trigger::TickFlagsChanged,
            Trigger::ModeChanged,
        ],
    ),
    (
        Stage::Labels,
        &[
            Trigger::Force,
            Trigger::BoundsModified,
            Trigger::PositionChanged,
            Trigger::RangeChanged,
            Trigger::LabelTextModified,
            Trigger::LabelsShown,
        ],
    ),
    (
        Stage::Labels2D,
        &[Trigger::Force, Trigger::ModeChanged, Trigger::DisplayBoundsChanged],
    ),
    (
        Stage::Title,
        &[
            Trigger::Force,
            Trigger::LabelTextModified,
            Trigger::BoundsModified,
            Trigger::PositionChanged,
            Trigger::TitleTextModified,
            Trigger::TitleShown,
        ],
    ),
    (
        Stage::Title2D,
        &[
            Trigger::Force,
            Trigger::ModeChanged,
            Trigger::DisplayBoundsChanged,
            Trigger::TitleRebuilt,
            Trigger::TitleShown,
        ],
    ),
];

/// The triggers registered for `stage`.
pub fn triggers_for(stage: Stage) -> &'static [Trigger] {
    DEPENDENCIES
        .iter()
        .find(|(s, _)| *s == stage)
        .map(|(_, t)| *t)
        .unwrap_or(&[])
}

/// Current values and stamps, gathered at the start of a build.
///
/// `ticks_rebuilt`, `title_rebuilt` and `hold_display_bounds` are filled in
/// by the build as the corresponding stages run.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildInputs {
    pub force: bool,
    pub actor_modified: Stamp,
    pub viewport_modified: Stamp,
    pub bounds_modified: Stamp,
    pub label_text_modified: Stamp,
    pub title_text_modified: Stamp,
    pub position: AxisPosition,
    pub tick_location: TickLocation,
    pub range: ValueRange,
    pub tick_flags: TickFlags,
    pub labels_visible: bool,
    pub title_visible: bool,
    pub use_2d_mode: bool,
    /// Projected bounding box; only gathered in 2D mode
    pub display_bounds: Option<DisplayBox>,
    pub ticks_rebuilt: bool,
    pub title_rebuilt: bool,
    /// 2D labels were skipped, so their projection snapshot must not advance
    pub hold_display_bounds: bool,
}

/// Snapshot of what the last completed build saw.
///
/// `None` means "never built", which compares unequal to every value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildState {
    pub built_at: Stamp,
    pub position: Option<AxisPosition>,
    pub tick_location: Option<TickLocation>,
    pub range: Option<ValueRange>,
    pub tick_flags: Option<TickFlags>,
    pub labels_visible: Option<bool>,
    pub title_visible: Option<bool>,
    pub use_2d_mode: Option<bool>,
    pub display_bounds: Option<DisplayBox>,
}

impl BuildState {
    pub fn has_built(&self) -> bool {
        !self.built_at.is_never()
    }

    /// Whether `trigger` has fired since this state was committed.
    pub fn fired(&self, trigger: Trigger, inputs: &BuildInputs) -> bool {
        let built = self.built_at;
        match trigger {
            Trigger::Force => inputs.force,
            Trigger::ActorModified => inputs.actor_modified.newer_than(built),
            Trigger::ViewportModified => inputs.viewport_modified.newer_than(built),
            Trigger::BoundsModified => inputs.bounds_modified.newer_than(built),
            Trigger::LabelTextModified => inputs.label_text_modified.newer_than(built),
            Trigger::TitleTextModified => inputs.title_text_modified.newer_than(built),
            Trigger::PositionChanged => self.position != Some(inputs.position),
            Trigger::TickLocationChanged => self.tick_location != Some(inputs.tick_location),
            Trigger::RangeChanged => self.range != Some(inputs.range),
            Trigger::TickFlagsChanged => self.tick_flags != Some(inputs.tick_flags),
            Trigger::LabelsShown => inputs.labels_visible && self.labels_visible != Some(true),
            Trigger::TitleShown => inputs.title_visible && self.title_visible != Some(true),
            Trigger::ModeChanged => self.use_2d_mode != Some(inputs.use_2d_mode),
            Trigger::DisplayBoundsChanged => {
                inputs.display_bounds.is_some() && self.display_bounds != inputs.display_bounds
            }
            Trigger::TicksRebuilt => inputs.ticks_rebuilt,
            Trigger::TitleRebuilt => inputs.title_rebuilt,
        }
    }

    /// The first registered trigger that fired for `stage`, if any.
    pub fn stale(&self, stage: Stage, inputs: &BuildInputs) -> Option<Trigger> {
        triggers_for(stage).iter().copied().find(|&t| self.fired(t, inputs))
    }

    /// Every registered trigger that fired for `stage`.
    pub fn reasons(&self, stage: Stage, inputs: &BuildInputs) -> Vec<Trigger> {
        triggers_for(stage).iter().copied().filter(|&t| self.fired(t, inputs)).collect()
    }

    /// The state after a build that consumed `inputs` completes.
    ///
    /// The projected bounds snapshot is only replaced when the build
    /// gathered one and did not hold it back.
    pub fn commit(&self, inputs: &BuildInputs) -> BuildState {
        let display_bounds = if inputs.hold_display_bounds {
            self.display_bounds
        } else {
            inputs.display_bounds.or(self.display_bounds)
        };
        BuildState {
            built_at: Stamp::next(),
            position: Some(inputs.position),
            tick_location: Some(inputs.tick_location),
            range: Some(inputs.range),
            tick_flags: Some(inputs.tick_flags),
            labels_visible: Some(inputs.labels_visible),
            title_visible: Some(inputs.title_visible),
            use_2d_mode: Some(inputs.use_2d_mode),
            display_bounds,
        }
    }
}
