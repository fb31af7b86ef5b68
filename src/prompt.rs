//! Prompt template and response post-processing for area summaries.

/// Sentinels the template asks the model to wrap its report in.
pub const SUMMARY_START_TAG: &str = "<summary>";
pub const SUMMARY_END_TAG: &str = "</summary>";

const PROMPT_PREAMBLE: &str = "\
You are a data analyst specializing in demographic and housing statistics. \
Your task is to create a concise, factual summary of a given area based on \
the provided information. Here's the content you need to analyze:";

const PROMPT_INSTRUCTIONS: &str = r#"Please follow these steps to create your summary:

1. Carefully read through the provided content.

2. In your analysis, identify and extract key information about:
    - The area's general characteristics
    - Available amenities, including broadband speed
    - Demographics
    - Crime (note that three months worth of crime data is here, break down by month); make sure to report the total count by month
    - Notable statistics

3. Pay special attention to the following categories and their associated percentages:
    - Housing types
    - Housing tenure
    - Housing prices
    - Household deprivation
    - Economic activity
    - Ethnic groups

4. Specifically highlight:
    - The percentage of social rented housing
    - The percentage of households with deprivation across all dimensions
    - The level of unemployment
    - The total count of crimes reported by category

5. Present your work as a crisp summary of all the data you have gathered. Make sure to:
    - Quote specific statistics and percentages from the text for each category
    - Calculate the total percentage for each category
    - If percentages within a category exceed 100%, show your work in adjusting the figures proportionally to ensure they sum to 100%
    - Organize the extracted information into clear categories (e.g., Housing, Demographics, Economy)
    - List any other key facts and statistics you've identified; make sure to note the level of deprivation in total, and in more than one dimension

Remember to maintain a professional and objective tone throughout your data extraction and summary.

Write the report in Markdown with this exact section order: General Characteristics, Amenities, Demographics, Economy, Housing, Crime Statistics, Notable Statistics. Wrap the finished report between <summary> and </summary> tags with nothing else outside them.

Here is an example of the report that you must write:

<example_report>
### Summary of High Street, Kimpton, Hitchin, SG4 8PT

#### General Characteristics
High Street is located in Kimpton, Hitchin, within the North Hertfordshire Local Authority. It falls within the Codicote & Kimpton ward/electoral division and the Hitchin constituency. The area is classified as a Small Town or Fringe Area.

#### Amenities
- **Broadband:** Ultrafast broadband (300Mbps+) is available
- **Nearest Services:**
  - Railway Station: Harpenden (3.4 miles)
  - Primary School: Kimpton Primary School (130 yards)
  - Secondary School: Katherine Warington School (2.6 miles)
  - GP Surgery: Whitwell Surgery (1.9 miles)

#### Demographics
- **Population:** 327 residents
- **Gender:** 47% male (153), 53% female (174)

- **Ethnic Groups:**
  - White: 93.6% (306)
  - Mixed Ethnicity: 5.8% (19)
  - Indian: 0.3% (1)
  - Other Asian: 0.3% (1)

#### Economy
- **Economic Activity:**
  - Full-Time Employee: 28.1% (72)
  - Part-Time Employee: 11.7% (30)
  - Self Employed: 19.1% (49)
  - Unemployed: 3.1% (8)
  - Full-Time Student: 5.5% (14)
  - Retired: 25.8% (66)
  - Other: 6.7% (17)

#### Housing
- **Housing Types:** (Total 127)
  - Detached: 35.4% (45)
  - Semi-Detached: 29.1% (37)
  - Terraced: 33.9% (43)
  - Flats: 1.6% (2)

- **Housing Tenure:** (Total 127)
  - Owned Outright: 43.3% (55)
  - Owned with Mortgage: 40.9% (52)
  - Social Rented: 7.1% (9)
  - Private Rented: 8.7% (11)

- **Household Deprivation:**
  - Not Deprived: 68.5% (87)
  - Deprived in One Dimension: 26.8% (34)
  - Deprived in Two Dimensions: 3.9% (5)
  - Deprived in Three Dimensions: 0.8% (1)
  - Deprived in Four Dimensions: 0%

#### Crime Statistics
- **October 2024:** 3 total crimes (1 Anti-social behaviour, 1 Vehicle crime, 1 Violence and sexual offences)
- **November 2024:** 3 total crimes (1 Anti-social behaviour, 1 Other theft, 1 Violence and sexual offences)
- **December 2024:** 9 total crimes (1 Anti-social behaviour, 2 Vehicle crime, 5 Violence and sexual offences, 1 Other crime)

#### Notable Statistics
- **Social Rented Housing:** 7.1% (9/127)
- **Households with Deprivation in One or More Dimensions:** 31.5% (40/127)
- **Unemployment Rate:** 3.1% (8/256)
- **Recent House Sale:** £777,500 (June 2021)
</example_report>"#;

/// Embed the corpus verbatim into the fixed instruction template.
#[must_use]
pub fn build_summary_prompt(corpus: &str) -> String {
    format!(
        "{PROMPT_PREAMBLE}\n\n<area_description>\n{corpus}\n</area_description>\n\n{PROMPT_INSTRUCTIONS}"
    )
}

/// Pull the report out of a raw model response.
///
/// When both sentinel tags are present, the result is strictly the text
/// between them. Otherwise the raw response passes through unchanged;
/// callers cannot assume the model honored the tag instruction.
#[must_use]
pub fn extract_report(raw: &str) -> &str {
    let Some(start) = raw.find(SUMMARY_START_TAG) else {
        return raw;
    };
    let after = &raw[start + SUMMARY_START_TAG.len()..];
    match after.find(SUMMARY_END_TAG) {
        Some(end) => &after[..end],
        None => raw,
    }
}
