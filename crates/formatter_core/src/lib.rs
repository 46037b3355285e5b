//! Job formatter core: pure request state machine, render pipeline and view-model helpers.
mod effect;
mod markup;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use markup::{Segment, TrustedMarkup};
pub use msg::{ExtractionOutcome, Msg};
pub use state::{
    AppState, DisplayState, RequestId, ResponsePolicy, ACK_WINDOW, EMPTY_INPUT_MESSAGE,
    PROCESSING_SENTINEL,
};
pub use update::update;
pub use view_model::{AppViewModel, ServiceStatus};
