use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormField, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        // Edits are ignored while a create request is in flight.
        if state.submitting
            && !matches!(intent, FormIntent::SubmitFailed | FormIntent::Reset)
        {
            return state;
        }

        match intent {
            FormIntent::Input(ch) => {
                if !ch.is_control() {
                    state.values.value_mut(state.focused).push(ch);
                }
                state
            }
            FormIntent::Backspace => {
                state.values.value_mut(state.focused).pop();
                state
            }
            FormIntent::FocusNext => {
                state.touched.insert(state.focused);
                state.focused = state.focused.next();
                state
            }
            FormIntent::FocusPrev => {
                state.touched.insert(state.focused);
                state.focused = state.focused.prev();
                state
            }
            FormIntent::Focus(field) => {
                state.touched.insert(state.focused);
                state.focused = field;
                state
            }
            FormIntent::TouchAll => {
                state.touched.extend(FormField::ALL);
                state
            }
            FormIntent::SubmitStarted => {
                state.submitting = true;
                state
            }
            FormIntent::SubmitFailed => {
                state.submitting = false;
                state
            }
            FormIntent::Reset => FormState::default(),
        }
    }
}
