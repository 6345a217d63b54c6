use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use serde_json::{json, Value};

const STORES: [(&str, &str); 3] = [
    ("LONDON CAMDEN EXP", "Express"),
    ("LONDON KENSINGTON EXT", "Extra"),
    ("LONDON ALDGATE MET", "Metro")
];

const PAYMENT_TYPES: [&str; 3] = ["MASTERCARD_DEBIT", "VISA_DEBIT", "AMEX_CREDIT"];

const GROCERIES: [(&str, i64); 8] = [
    ("Tesco Fresh Milk Semi-Skimmed 2.27L", 160),
    ("Tesco Finest Sourdough Bread 400G", 220),
    ("Tesco British Free Range Eggs 6 Pack", 285),
    ("Tesco Cherry Tomatoes 330G", 200),
    ("Tesco Bananas Loose", 18),
    ("Cadbury Dairy Milk Chocolate 110G", 150),
    ("Tesco Choc Chip Cookies 200G", 120),
    ("Tesco Everyday Value Tea Bags 80", 95)
];

const STRAWBERRIES: (&str, i64) = ("Tesco British Strawberries 400G", 275);
const PROSECCO: (&str, i64) = ("Tesco Finest Prosecco 75Cl", 700);

const WINES: [(&str, i64); 3] = [
    ("Tesco Finest Prosecco 75Cl", 700),
    ("Tesco Finest Champagne 75Cl", 1500),
    ("Tesco Finest Red Wine 75Cl", 850)
];

const PROBABILITY_SUMMER_STRAWBERRIES: f64 = 0.80;
const PROBABILITY_OFF_SEASON_STRAWBERRIES: f64 = 0.15;
const PROBABILITY_WINE: f64 = 0.10;
const DECEMBER_WINE_TRIPS: usize = 20;

struct GeneratorConfig {
    num_trips: usize,
    first_name: String,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_trips = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(150);
        let first_name = args.get(2).cloned().unwrap_or_else(|| "Jamie".to_string());

        Self {
            num_trips,
            first_name,
            output_path: "samples/generated.json".to_string(),
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} trips (+{} December trips) for {} in {}...",
        config.num_trips, DECEMBER_WINE_TRIPS, config.first_name, config.output_path
    );

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let mut rng = rand::thread_rng();
    let mut purchases = Vec::with_capacity(config.num_trips + DECEMBER_WINE_TRIPS);

    for _ in 0..config.num_trips {
        let timestamp = random_timestamp(&mut rng, 1, 12);
        let mut products = random_groceries(&mut rng);

        add_strawberries(&mut rng, &timestamp, &mut products);

        if rng.gen_bool(PROBABILITY_WINE) {
            products.push((PROSECCO.0, PROSECCO.1, 1));
        }

        purchases.push(create_purchase(&mut rng, timestamp, &products));
    }

    for _ in 0..DECEMBER_WINE_TRIPS {
        let timestamp = random_timestamp(&mut rng, 12, 12);
        let mut products = Vec::new();

        for _ in 0..rng.gen_range(1..=4) {
            if let Some(&(name, pence)) = WINES.choose(&mut rng) {
                products.push((name, pence, 1));
            }
        }

        if rng.gen_bool(0.5) {
            products.extend(random_groceries(&mut rng).into_iter().take(2));
        }

        purchases.push(create_purchase(&mut rng, timestamp, &products));
    }

    let document = json!({
        "Customer Profile And Contact Data": {
            "Online Account": { "first name": config.first_name }
        },
        "Purchase": [purchases]
    });

    let mut writer = BufWriter::new(File::create(&config.output_path)?);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)?;
    writer.flush()?;

    println!("Generation complete.");

    Ok(())
}

fn random_timestamp<R: Rng>(rng: &mut R, first_month: u32, last_month: u32) -> NaiveDateTime {
    let month = rng.gen_range(first_month..=last_month);
    let day = rng.gen_range(1..=28);
    let hour = if rng.gen_bool(0.08) { rng.gen_range(22..24) } else { rng.gen_range(7..22) };

    NaiveDate::from_ymd_opt(2025, month, day)
        .and_then(|date| date.and_hms_opt(hour, rng.gen_range(0..60), rng.gen_range(0..60)))
        .unwrap_or_default()
}

fn random_groceries<R: Rng>(rng: &mut R) -> Vec<(&'static str, i64, u32)> {
    let count = rng.gen_range(1..=5);

    GROCERIES.choose_multiple(rng, count)
        .map(|&(name, pence)| (name, pence, rng.gen_range(1..=3)))
        .collect()
}

fn add_strawberries<R: Rng>(rng: &mut R, timestamp: &NaiveDateTime, products: &mut Vec<(&'static str, i64, u32)>) {
    let in_season = (6..=8).contains(&timestamp.month());

    if in_season && rng.gen_bool(PROBABILITY_SUMMER_STRAWBERRIES) {
        let quantity = *[1, 2, 2, 3].choose(rng).unwrap_or(&2);
        products.push((STRAWBERRIES.0, STRAWBERRIES.1, quantity));
    } else if !in_season && rng.gen_bool(PROBABILITY_OFF_SEASON_STRAWBERRIES) {
        products.push((STRAWBERRIES.0, STRAWBERRIES.1, 1));
    }
}

fn create_purchase<R: Rng>(rng: &mut R, timestamp: NaiveDateTime, products: &[(&str, i64, u32)]) -> Value {
    let (store, format) = STORES.choose(rng).copied().unwrap_or(STORES[0]);
    let payment = PAYMENT_TYPES.choose(rng).copied().unwrap_or(PAYMENT_TYPES[0]);

    let net_pence: i64 = products.iter().map(|&(_, pence, quantity)| pence * quantity as i64).sum();
    let net = Decimal::new(net_pence, 2);
    let savings = (net * Decimal::new(5, 2)).round_dp(2);
    let gross = net + Decimal::new(20, 2);

    let lines: Vec<Value> = products.iter()
        .map(|&(name, pence, quantity)| json!({
            "name": name,
            "quantity": quantity.to_string(),
            "channel": "instore",
            "price": Decimal::new(pence, 2).to_string()
        }))
        .collect();

    json!({
        "basketValueGross": gross.to_string(),
        "purchaseType": "instore",
        "overallBasketSavings": savings.to_string(),
        "paymentType": [{ "type": payment, "category": "Contactless", "amount": net.to_string() }],
        "timeStamp": timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        "basketValueNet": net.to_string(),
        "storeName": store,
        "storeFormat": format,
        "product": lines
    })
}
