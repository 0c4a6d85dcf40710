/// interactive terminal front end for the accrual engine
///
/// walks the member through every activity field, validates each entry
/// (re-prompting instead of coercing), then prints the rendered report.
use std::io::{self, BufRead, Write};

use loyalty_accrual_rs::input::{parse_count, parse_flag};
use loyalty_accrual_rs::{report, AccrualEngine, InputRecord, RulesetConfig, DEFAULT_TARGET_LSP};

struct Prompt {
    field: &'static str,
    section: &'static str,
    text: &'static str,
    default: u64,
}

const PROMPTS: &[Prompt] = &[
    Prompt {
        field: "target_lsp",
        section: "Target",
        text: "Point target",
        default: DEFAULT_TARGET_LSP,
    },
    Prompt {
        field: "domestic_flights",
        section: "1. Flights",
        text: "Domestic flights per year (one-way segments)",
        default: 0,
    },
    Prompt {
        field: "international_segment_miles",
        section: "1. Flights",
        text: "International segment miles per year (total)",
        default: 0,
    },
    Prompt {
        field: "card_spend_yen",
        section: "2. Finance & payments",
        text: "Annual card spend (yen)",
        default: 0,
    },
    Prompt {
        field: "wallet_miles",
        section: "2. Finance & payments",
        text: "Miles earned through the payment wallet per year",
        default: 0,
    },
    Prompt {
        field: "marketplace_miles",
        section: "3. Shopping",
        text: "Miles earned through the marketplace per year",
        default: 0,
    },
    Prompt {
        field: "premium_banking",
        section: "4. Banking",
        text: "Premium banking member (1=yes, 0=no)",
        default: 0,
    },
    Prompt {
        field: "yen_balance_man_yen",
        section: "4. Banking",
        text: "Average yen deposit balance (units of 10,000 yen)",
        default: 0,
    },
    Prompt {
        field: "fx_balance_man_yen",
        section: "4. Banking",
        text: "Average foreign-currency balance, yen-converted (units of 10,000 yen)",
        default: 0,
    },
    Prompt {
        field: "domestic_tours",
        section: "5. Travel",
        text: "Domestic package tours per year",
        default: 0,
    },
    Prompt {
        field: "overseas_tours",
        section: "5. Travel",
        text: "Overseas package tours per year",
        default: 0,
    },
    Prompt {
        field: "wellness_months",
        section: "6. Lifestyle",
        text: "Wellness subscription months used (0-12)",
        default: 0,
    },
    Prompt {
        field: "energy_months",
        section: "6. Lifestyle",
        text: "Electricity plan months used (0-12)",
        default: 0,
    },
    Prompt {
        field: "broadband_months",
        section: "6. Lifestyle",
        text: "Broadband plan months used (0-12)",
        default: 0,
    },
    Prompt {
        field: "mobile_months",
        section: "6. Lifestyle",
        text: "Mobile plan months used (0-12)",
        default: 0,
    },
    Prompt {
        field: "donation_yen",
        section: "6. Lifestyle",
        text: "Hometown tax donations per year (yen)",
        default: 0,
    },
];

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("--- Annual LSP Accrual Simulator ---");
    println!("Enter a value for each item.");
    println!("Press Enter without typing anything to use the default.");
    println!();

    let mut record = InputRecord::default();
    for prompt in PROMPTS {
        let value = read_value(&mut lines, prompt)?;
        apply(&mut record, prompt.field, value);
    }

    let engine = AccrualEngine::new(RulesetConfig::current());
    let result = engine.calculate(&record);

    println!();
    println!("{}", "=".repeat(50));
    print!("{}", report::render(&result));
    println!("{}", "=".repeat(50));

    Ok(())
}

/// prompt until the entry parses; empty input takes the default
fn read_value<B: BufRead>(
    lines: &mut io::Lines<B>,
    prompt: &Prompt,
) -> io::Result<u64> {
    loop {
        print!(
            "[{}] {} (default: {}): ",
            prompt.section, prompt.text, prompt.default
        );
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // end of input: fall back to the default for the rest of the run
            None => return Ok(prompt.default),
        };
        if line.trim().is_empty() {
            return Ok(prompt.default);
        }

        let parsed = if prompt.field == "premium_banking" {
            parse_flag(prompt.field, &line).map(u64::from)
        } else {
            parse_count(prompt.field, &line)
        };
        match parsed {
            Ok(value) => return Ok(value),
            Err(e) => println!(">>> Error: {e}"),
        }
    }
}

fn apply(record: &mut InputRecord, field: &'static str, value: u64) {
    match field {
        "target_lsp" => record.target_lsp = value,
        "domestic_flights" => record.domestic_flights = value,
        "international_segment_miles" => record.international_segment_miles = value,
        "card_spend_yen" => record.card_spend_yen = value,
        "wallet_miles" => record.wallet_miles = value,
        "marketplace_miles" => record.marketplace_miles = value,
        "premium_banking" => record.premium_banking = value == 1,
        "yen_balance_man_yen" => record.yen_balance_man_yen = value,
        "fx_balance_man_yen" => record.fx_balance_man_yen = value,
        "domestic_tours" => record.domestic_tours = value,
        "overseas_tours" => record.overseas_tours = value,
        "wellness_months" => record.wellness_months = value,
        "energy_months" => record.energy_months = value,
        "broadband_months" => record.broadband_months = value,
        "mobile_months" => record.mobile_months = value,
        "donation_yen" => record.donation_yen = value,
        _ => unreachable!("unknown prompt field {field}"),
    }
}
