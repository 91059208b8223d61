mod form;
mod location;
mod row;
mod validation;

pub use form::FormState;
pub use location::{Location, next_location, previous_location};
pub use row::{BufferFull, ROW_CAPACITY, Row, RowBuffer};
pub use validation::{FormMessage, TABLE_FULL_MESSAGE, validate_name};
