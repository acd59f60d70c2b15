mod field;
mod validation;
mod values;

pub use field::Field;
pub use validation::{
    DEFAULT_FIRST_NAME_MIN_LEN, Rules, ValidationError, validate_email, validate_first_name,
    validate_last_name, validate_on_change, validate_on_submit,
};
pub use values::{FormValues, SubmittedValues};
