/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

mod attributes;
mod scanner;
mod validator;

pub use scanner::Scanner;
pub use scanner::Tag;
pub use scanner::TagKind;

pub use validator::ErrorKind;
pub use validator::Location;
pub use validator::Options;
pub use validator::Summary;
pub use validator::TagStack;
pub use validator::ValidationError;
pub use validator::Validator;
pub use validator::validate;
