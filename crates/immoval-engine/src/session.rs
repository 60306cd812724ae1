//! Request-scoped state machine gating the path to scoring.
//!
//! `Idle → LocationPending → FormPending → Ready → Scoring → Displayed`.
//! Scoring is only reachable from Ready; a missing precondition surfaces as
//! a [`PreconditionWarning`] value for the UI, never as an error.

use serde::Serialize;
use std::fmt;

use immoval_core::models::{ReadySelection, ResolvedLocation, UserSelection};

/// Where the current interaction stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    LocationPending,
    FormPending,
    Ready,
    Scoring,
    Displayed,
}

/// A non-fatal, user-facing reason why scoring cannot start yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PreconditionWarning {
    LocationUnresolved,
    MissingField(&'static str),
}

impl fmt::Display for PreconditionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreconditionWarning::LocationUnresolved => {
                write!(f, "Please select a location from the map.")
            }
            PreconditionWarning::MissingField(field) => {
                write!(f, "Please complete all property details: {} is not set.", field)
            }
        }
    }
}

/// One interactive prediction request in progress.
#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    selection: UserSelection,
    scored: bool,
    displayed: bool,
}

impl PredictionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session from an already-populated selection (the HTTP adapter
    /// receives the whole form in one request).
    pub fn from_selection(selection: UserSelection) -> Self {
        Self { selection, scored: false, displayed: false }
    }

    pub fn selection(&self) -> &UserSelection {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        if self.displayed {
            return Phase::Displayed;
        }
        if self.scored {
            return Phase::Scoring;
        }

        let s = &self.selection;
        let untouched = s.location.is_none()
            && s.property_type.is_none()
            && s.subtype.is_none()
            && s.building_condition.is_none()
            && s.rooms.is_none()
            && s.living_area.is_none()
            && s.facades.is_none();

        if untouched {
            Phase::Idle
        } else if s.location.is_none() {
            Phase::LocationPending
        } else if self.checked_selection().is_err() {
            Phase::FormPending
        } else {
            Phase::Ready
        }
    }

    // Form mutations. Any edit routes the session back out of the scored
    // states; the next evaluation starts fresh.

    pub fn set_location(&mut self, location: ResolvedLocation) {
        self.selection.location = Some(location);
        self.reset_outcome();
    }

    pub fn set_property_type(&mut self, value: immoval_core::models::PropertyType) {
        self.selection.property_type = Some(value);
        self.reset_outcome();
    }

    pub fn set_subtype(&mut self, value: String) {
        self.selection.subtype = Some(value);
        self.reset_outcome();
    }

    pub fn set_building_condition(&mut self, value: String) {
        self.selection.building_condition = Some(value);
        self.reset_outcome();
    }

    pub fn set_rooms(&mut self, value: u32) {
        self.selection.rooms = Some(value);
        self.reset_outcome();
    }

    pub fn set_living_area(&mut self, value: f64) {
        self.selection.living_area = Some(value);
        self.reset_outcome();
    }

    pub fn set_facades(&mut self, value: u32) {
        self.selection.facades = Some(value);
        self.reset_outcome();
    }

    pub fn set_amenities(&mut self, value: immoval_core::models::Amenities) {
        self.selection.amenities = value;
        self.reset_outcome();
    }

    fn reset_outcome(&mut self) {
        self.scored = false;
        self.displayed = false;
    }

    /// Attempt the Ready → Scoring transition. On success the session is in
    /// Scoring and the caller holds the proof-of-completeness selection; on
    /// failure the warning is returned and the phase is unchanged.
    pub fn begin_scoring(&mut self) -> Result<ReadySelection, PreconditionWarning> {
        let ready = self.checked_selection()?;
        self.scored = true;
        Ok(ready)
    }

    /// Scoring → Displayed, once the outcome has been rendered.
    pub fn mark_displayed(&mut self) {
        if self.scored {
            self.displayed = true;
        }
    }

    fn checked_selection(&self) -> Result<ReadySelection, PreconditionWarning> {
        let s = &self.selection;

        let location = s.location.clone().ok_or(PreconditionWarning::LocationUnresolved)?;
        let property_type =
            s.property_type.ok_or(PreconditionWarning::MissingField("property type"))?;
        let subtype =
            s.subtype.clone().ok_or(PreconditionWarning::MissingField("property subtype"))?;
        let building_condition = s
            .building_condition
            .clone()
            .ok_or(PreconditionWarning::MissingField("building condition"))?;
        let rooms = s.rooms.ok_or(PreconditionWarning::MissingField("number of rooms"))?;
        let living_area =
            s.living_area.ok_or(PreconditionWarning::MissingField("living area"))?;
        let facades = s.facades.ok_or(PreconditionWarning::MissingField("number of facades"))?;

        Ok(ReadySelection {
            property_type,
            subtype,
            building_condition,
            rooms,
            living_area,
            facades,
            amenities: s.amenities,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use immoval_core::models::{Amenities, PropertyType};

    fn location() -> ResolvedLocation {
        ResolvedLocation {
            postal_code: "1000".to_string(),
            municipality: "Brussels".to_string(),
            province: "Brussels-Capital".to_string(),
        }
    }

    fn fill_form(session: &mut PredictionSession) {
        session.set_property_type(PropertyType::Apartment);
        session.set_subtype("APARTMENT".to_string());
        session.set_building_condition("GOOD".to_string());
        session.set_rooms(2);
        session.set_living_area(60.0);
        session.set_facades(2);
        session.set_amenities(Amenities::default());
    }

    #[test]
    fn test_fresh_session_is_idle() {
        assert_eq!(PredictionSession::new().phase(), Phase::Idle);
    }

    #[test]
    fn test_form_without_location_is_location_pending() {
        let mut session = PredictionSession::new();
        fill_form(&mut session);
        assert_eq!(session.phase(), Phase::LocationPending);

        let warning = session.begin_scoring().unwrap_err();
        assert_eq!(warning, PreconditionWarning::LocationUnresolved);
        assert_eq!(session.phase(), Phase::LocationPending);
    }

    #[test]
    fn test_location_without_form_is_form_pending() {
        let mut session = PredictionSession::new();
        session.set_location(location());
        assert_eq!(session.phase(), Phase::FormPending);

        let warning = session.begin_scoring().unwrap_err();
        assert_eq!(warning, PreconditionWarning::MissingField("property type"));
    }

    #[test]
    fn test_complete_session_reaches_displayed() {
        let mut session = PredictionSession::new();
        session.set_location(location());
        fill_form(&mut session);
        assert_eq!(session.phase(), Phase::Ready);

        let ready = session.begin_scoring().unwrap();
        assert_eq!(session.phase(), Phase::Scoring);
        assert_eq!(ready.rooms, 2);
        assert_eq!(ready.location.postal_code, "1000");

        session.mark_displayed();
        assert_eq!(session.phase(), Phase::Displayed);
    }

    #[test]
    fn test_edit_after_display_reopens_the_session() {
        let mut session = PredictionSession::new();
        session.set_location(location());
        fill_form(&mut session);
        session.begin_scoring().unwrap();
        session.mark_displayed();

        session.set_living_area(75.0);
        assert_eq!(session.phase(), Phase::Ready);
    }

    #[test]
    fn test_displayed_requires_scoring_first() {
        let mut session = PredictionSession::new();
        session.mark_displayed();
        assert_eq!(session.phase(), Phase::Idle);
    }
}
