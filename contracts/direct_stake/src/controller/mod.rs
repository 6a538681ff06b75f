pub mod emergency;
pub mod position;
pub mod rewards;
pub mod validator;
