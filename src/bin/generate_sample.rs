/// Write `sample_restaurants.csv`, the listing the main binary loads by
/// default.  Rows cover the interesting shapes: fractional and whole-number
/// distances, a non-numeric distance, and a row with most fields blank.
fn main() {
    let output_path = "sample_restaurants.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "name", "logo_url", "website", "deals", "menu_url", "reviews", "location",
            "distance", "maps_url",
        ])
        .expect("Failed to write header");

    let rows: [[&str; 9]; 8] = [
        [
            "Luigi's Trattoria",
            "https://img.example/luigis.png",
            "https://luigis.example",
            "2-for-1 pasta on weekdays",
            "https://luigis.example/menu",
            "4.5/5 (120 reviews)",
            "12 Main St",
            "1.2 miles",
            "https://maps.example/?q=luigis+trattoria",
        ],
        [
            "Taco Verde",
            "https://img.example/tacoverde.png",
            "https://tacoverde.example",
            "Taco Tuesday: 3 tacos for $5",
            "https://tacoverde.example/menu",
            "4.2/5 (86 reviews)",
            "9 Elm Ave",
            "0.5 miles",
            "https://maps.example/?q=taco+verde",
        ],
        [
            "Blue Bay Seafood",
            "https://img.example/bluebay.png",
            "https://bluebay.example",
            "Free chowder with any entree",
            "https://bluebay.example/menu",
            "4.7/5 (203 reviews)",
            "301 Harbor Blvd",
            "3.0 miles",
            "https://maps.example/?q=blue+bay+seafood",
        ],
        [
            "Saffron House",
            "https://img.example/saffron.png",
            "https://saffron.example",
            "Lunch buffet $11.99",
            "https://saffron.example/menu",
            "4.3/5 (154 reviews)",
            "77 Curry Lane",
            "2.1 miles",
            "https://maps.example/?q=saffron+house",
        ],
        [
            "The Bagel Stop",
            "https://img.example/bagelstop.png",
            "https://bagelstop.example",
            "Half-price bagels after 3pm",
            "https://bagelstop.example/menu",
            "4.0/5 (67 reviews)",
            "5 Station Plaza",
            "0.3 miles",
            "https://maps.example/?q=the+bagel+stop",
        ],
        [
            "Pho Midnight",
            "https://img.example/phomidnight.png",
            "https://phomidnight.example",
            "Late-night bowl + drink combo",
            "https://phomidnight.example/menu",
            "4.6/5 (98 reviews)",
            "440 2nd St",
            "1.8 miles",
            "https://maps.example/?q=pho+midnight",
        ],
        [
            "Corner Crepe Cart",
            "",
            "",
            "Student discount 10%",
            "",
            "4.8/5 (31 reviews)",
            "Campus quad",
            "nearby",
            "",
        ],
        [
            "Ember & Oak",
            "https://img.example/emberoak.png",
            "https://emberoak.example",
            "",
            "https://emberoak.example/menu",
            "",
            "18 Orchard Rd",
            "4.4 miles",
            "https://maps.example/?q=ember+and+oak",
        ],
    ];

    for row in &rows {
        writer.write_record(row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output file");

    println!("Wrote {} restaurants to {output_path}", rows.len());
}
