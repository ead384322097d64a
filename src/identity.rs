// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Identity Synthesis
//
// Stable display names and ticker symbols for every entity. Categories in
// the catalog carry a 3-letter prefix and (for the headline categories) a
// canonical roster in rank order; everything else falls back to synthesized
// "<Category> #<rank>" identities.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const TICKER_LEN: usize = 4;
const TICKER_PAD: char = 'X';
const GENERIC_PREFIX: &str = "CAT";

// ---------------------------------------------------------------------------
// Category catalog (configuration data consumed by the synthesizer)
// ---------------------------------------------------------------------------

struct CategoryTable {
    name: &'static str,
    prefix: &'static str,
    roster: &'static [&'static str],
}

static MALE_ATHLETES: &[&str] = &[
    "LeBron James", "Tom Brady", "Lionel Messi", "Cristiano Ronaldo",
    "Tiger Woods", "Roger Federer", "Usain Bolt", "Michael Phelps",
    "Kobe Bryant", "Serena Williams", "Aaron Rodgers", "Patrick Mahomes",
    "Stephen Curry", "Kevin Durant", "Mike Trout", "Connor McDavid",
    "Lewis Hamilton", "Rafael Nadal", "Novak Djokovic", "Virat Kohli",
    "Neymar Jr", "Kylian Mbappé", "Luka Dončić", "Giannis Antetokounmpo",
    "Jayson Tatum", "Luka Modrić", "Robert Lewandowski", "Mohamed Salah",
    "Sadio Mané", "Erling Haaland",
];

static STARTUPS: &[&str] = &[
    "OpenAI", "Stripe", "Canva", "Figma", "Notion", "Linear", "Vercel",
    "Supabase", "PlanetScale", "Railway", "Render", "Netlify", "Prisma",
    "tRPC", "Next.js", "Remix", "SvelteKit", "Nuxt", "Vue", "React",
    "Angular", "Svelte", "Solid", "Qwik", "Astro",
];

static INFLUENCERS: &[&str] = &[
    "MrBeast", "PewDiePie", "T-Series", "Cocomelon", "SET India",
    "5-Minute Crafts", "WWE", "Like Nastya", "Vlad and Niki", "Dude Perfect",
    "Markiplier", "Jacksepticeye", "DanTDM", "VanossGaming", "PrestonPlayz",
    "SSundee", "PopularMMOs", "TheDiamondMinecart", "CaptainSparklez",
    "Skeppy", "BadBoyHalo", "GeorgeNotFound", "Dream", "Sapnap",
    "TommyInnit", "Tubbo", "Ranboo", "Wilbur Soot", "Philza", "Technoblade",
];

static CLOTHING_BRANDS: &[&str] = &[
    "Nike", "Adidas", "Supreme", "Off-White", "Balenciaga", "Gucci",
    "Louis Vuitton", "Chanel", "Dior", "Prada", "Versace", "Armani",
    "Tom Ford", "Saint Laurent", "Givenchy", "Celine", "Loewe",
    "Bottega Veneta", "Fendi", "Valentino", "Burberry", "Alexander McQueen",
    "Rick Owens", "Raf Simons", "Vivienne Westwood",
];

static CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix",
    "Philadelphia", "San Antonio", "San Diego", "Dallas", "San Jose",
    "Austin", "Jacksonville", "Fort Worth", "Columbus", "Charlotte",
    "San Francisco", "Indianapolis", "Seattle", "Denver", "Washington",
    "Boston", "El Paso", "Nashville", "Detroit", "Oklahoma City",
];

static UNIVERSITIES: &[&str] = &[
    "Harvard", "Stanford", "MIT", "Yale", "Princeton", "Columbia",
    "University of Chicago", "Penn", "Caltech", "Duke", "Northwestern",
    "Johns Hopkins", "Dartmouth", "Brown", "Vanderbilt", "Rice",
    "Washington University", "Cornell", "Emory", "Georgetown",
    "Carnegie Mellon", "UCLA", "UC Berkeley", "USC", "NYU",
];

static TECH_COMPANIES: &[&str] = &[
    "Apple", "Microsoft", "Google", "Amazon", "Meta", "Tesla", "Netflix",
    "Nvidia", "Oracle", "Salesforce", "Adobe", "Intel", "Cisco", "IBM",
    "Qualcomm", "Broadcom", "ServiceNow", "Workday", "Snowflake",
    "CrowdStrike", "Okta", "Zscaler", "Palo Alto Networks", "Fortinet",
    "Splunk",
];

static MOVIES: &[&str] = &[
    "Avatar", "Avengers: Endgame", "Titanic", "Star Wars", "Jurassic World",
    "The Lion King", "The Avengers", "Furious 7", "Frozen II",
    "Avengers: Infinity War", "Top Gun: Maverick", "Black Panther",
    "Harry Potter", "Spider-Man", "Transformers", "The Dark Knight",
    "Pirates of the Caribbean", "Toy Story", "Finding Nemo", "Incredibles",
    "Shrek", "Despicable Me", "Minions", "Frozen", "Moana",
];

static CATEGORY_TABLES: &[CategoryTable] = &[
    CategoryTable { name: "Male Athletes", prefix: "ATH", roster: MALE_ATHLETES },
    CategoryTable { name: "Startups", prefix: "STU", roster: STARTUPS },
    CategoryTable { name: "Influencers", prefix: "INF", roster: INFLUENCERS },
    CategoryTable { name: "Clothing Brands", prefix: "CLB", roster: CLOTHING_BRANDS },
    CategoryTable { name: "Cities", prefix: "CTY", roster: CITIES },
    CategoryTable { name: "Universities", prefix: "UNI", roster: UNIVERSITIES },
    CategoryTable { name: "Tech Companies", prefix: "TCH", roster: TECH_COMPANIES },
    CategoryTable { name: "Movies", prefix: "MOV", roster: MOVIES },
    CategoryTable { name: "Sports Teams", prefix: "SPT", roster: &[] },
    CategoryTable { name: "Crypto", prefix: "CRY", roster: &[] },
    CategoryTable { name: "Gaming", prefix: "GAM", roster: &[] },
    CategoryTable { name: "Food & Beverage", prefix: "FNB", roster: &[] },
    CategoryTable { name: "Fashion", prefix: "FSH", roster: &[] },
    CategoryTable { name: "Entertainment", prefix: "ENT", roster: &[] },
];

fn table(category: &str) -> Option<&'static CategoryTable> {
    CATEGORY_TABLES.iter().find(|t| t.name == category)
}

/// Every category in the catalog, in display order.
pub fn known_categories() -> Vec<&'static str> {
    CATEGORY_TABLES.iter().map(|t| t.name).collect()
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Canonical roster entry for `(category, rank)`, when one exists.
pub fn canonical_name(category: &str, rank: u32) -> Option<&'static str> {
    let index = rank.checked_sub(1)? as usize;
    table(category).and_then(|t| t.roster.get(index)).copied()
}

/// Display name: the roster entry in rank order, else `"<category> #<rank>"`.
///
/// Unknown categories and out-of-roster ranks never fail; they synthesize.
pub fn display_name(category: &str, rank: u32) -> String {
    match canonical_name(category, rank) {
        Some(name) => name.to_string(),
        None => format!("{} #{}", category, rank),
    }
}

/// Ticker prefix for a category, `"CAT"` when the category is unknown.
pub fn category_prefix(category: &str) -> &'static str {
    table(category).map(|t| t.prefix).unwrap_or(GENERIC_PREFIX)
}

// ---------------------------------------------------------------------------
// Tickers
// ---------------------------------------------------------------------------

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

fn push_unique(ticker: &mut Vec<char>, c: char) {
    if ticker.len() < TICKER_LEN && c.is_ascii_alphabetic() && !ticker.contains(&c) {
        ticker.push(c);
    }
}

/// Derive a 4-letter uppercase ticker from the letters of `name`.
///
/// Multi-word names contribute the first letter of up to two words, then
/// unique consonants (then any unique letters) of the last word. Single
/// words use first letter plus unique consonants, then any unique letters.
/// Letters are never reused; short names pad with `'X'`. The result is
/// always exactly 4 uppercase ASCII letters.
pub fn ticker_symbol(name: &str) -> String {
    let upper = name.to_uppercase();
    let clean: Vec<char> = upper.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    let words: Vec<&str> = upper.split_whitespace().collect();

    let mut ticker: Vec<char> = Vec::with_capacity(TICKER_LEN);

    if words.len() >= 2 {
        for word in words.iter().take(2) {
            if let Some(first) = word.chars().find(|c| c.is_ascii_alphabetic()) {
                push_unique(&mut ticker, first);
            }
        }
        if let Some(last) = words.last() {
            for c in last.chars() {
                if ticker.len() >= TICKER_LEN {
                    break;
                }
                if c.is_ascii_alphabetic() && !is_vowel(c) {
                    push_unique(&mut ticker, c);
                }
            }
        }
    } else if let Some(&first) = clean.first() {
        push_unique(&mut ticker, first);
        for &c in &clean {
            if ticker.len() >= TICKER_LEN {
                break;
            }
            if !is_vowel(c) {
                push_unique(&mut ticker, c);
            }
        }
    }

    // Fill remaining slots with any unused letters of the whole name.
    for &c in &clean {
        if ticker.len() >= TICKER_LEN {
            break;
        }
        push_unique(&mut ticker, c);
    }

    while ticker.len() < TICKER_LEN {
        ticker.push(TICKER_PAD);
    }
    ticker.into_iter().collect()
}

/// Ticker shown on screen for `(category, rank)`.
///
/// Roster entities derive the 4-letter symbol from their name; synthesized
/// entities use `<prefix><rank>` so symbols stay distinct within a category.
pub fn entity_ticker(category: &str, rank: u32) -> String {
    match canonical_name(category, rank) {
        Some(name) => ticker_symbol(name),
        None => format!("{}{}", category_prefix(category), rank),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
