use fit_core::{Gender, Occasion, RealismLevel};

pub fn handle() {
    println!("Occasions:");
    for occasion in Occasion::ALL {
        println!("  {:<12} {}", occasion.slug(), occasion.label());
    }

    println!("\nGenders:");
    for gender in Gender::ALL {
        println!("  {}", gender.label());
    }

    println!("\nRealism levels:");
    for level in RealismLevel::ALL {
        println!("  {:<20} {}", level.slug(), level.style_phrase());
    }
}
