// Tests for the champion select decision rules and polling controller

#[cfg(test)]
mod test_helpers;
