//! State - Headless Widget Engines
//!
//! Everything here is plain data with no GPUI types, so the interaction rules can be
//! driven and tested without a window. The views in `fields` own one of these and
//! forward key and mouse events into it.

pub mod form_state;
pub mod mask_state;
pub mod number_state;
pub mod radio_state;
pub mod select_state;
pub mod text_state;

pub use form_state::{FieldController, FormEvent, FormState, FormValues, Resolver, SubscriptionId};
pub use mask_state::{MaskPattern, MaskedInputState, PhoneFormat, SlotRule};
pub use number_state::NumberInputState;
pub use radio_state::RadioState;
pub use select_state::{Candidate, SelectAction, SelectConfig, SelectState};
pub use text_state::TextInputState;
