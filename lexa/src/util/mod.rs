// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod file_location;
mod file_range;

pub use self::{
    file_location::FileLocation,
    file_range::FileRange,
};
