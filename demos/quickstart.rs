use chrono::Utc;
use luach::{convert_to_hebrew_date, intercalation_cycle_info, molad, CivilMoment, HebrewMonth};

fn main() {
    let now = CivilMoment::with_offset(Utc::now().fixed_offset());
    let today = convert_to_hebrew_date(&now, "UTC").expect("UTC is always valid");
    let cycle = intercalation_cycle_info(today.hebrew_year());
    let next_year = molad(today.hebrew_year() + 1, HebrewMonth::Tishrei).expect("Tishrei exists");

    println!("Jerusalem: {}", today.jerusalem_time());
    println!("Hebrew:    {today}");
    println!(
        "Cycle:     year {} of 19 ({} months)",
        cycle.year_in_cycle, cycle.month_count
    );
    println!("Molad Tishrei {}: {next_year}", today.hebrew_year() + 1);
}
