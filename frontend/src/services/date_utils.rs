use js_sys::Date;

/// Today in YYYY-MM-DD format, used as the date picker's upper bound
pub fn get_current_date() -> String {
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_current_date_is_a_date_input_value() {
        let today = get_current_date();
        assert_eq!(today.len(), 10);
        assert!(shared::format_date_of_birth(&today, "%d/%b/%Y").is_ok());
    }
}
