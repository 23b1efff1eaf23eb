use common::error::ApiError;
use common::form::TextField;

pub enum Msg {
    SetField(TextField, String),
    SetEmail(usize, String),
    AddEmail,
    RemoveEmail(usize),
    Submit,
    Finished(Result<(), ApiError>),
    Cancel,
}
