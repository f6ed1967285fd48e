//! Extraction module tests
//!
//! These tests verify the brand and model listing parsers against
//! representative page markup, without a live browser.

use autocatalog::extraction::{
    parse_brand_listing, parse_model_listing, parse_year_range, strip_brand_prefix,
};
use pretty_assertions::assert_eq;

const BASE_URL: &str = "https://www.autoevolution.com/cars/";

const LANDING_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<body>
  <div id="header">Cars, reviewed</div>
  <div class="container carlist clearfix">
    <div class="col2width fl bcol-white carman">
      <h5><a href="https://www.autoevolution.com/abarth/">ABARTH</a></h5>
      <span itemprop="name">ABARTH</span>
      <b>10 models</b>
    </div>
    <div class="col2width fl bcol-white carman">
      <h5><a href="https://www.autoevolution.com/alfa-romeo/">ALFA ROMEO</a></h5>
      <span itemprop="name">ALFA ROMEO</span>
    </div>
    <div class="col2width fl bcol-white carman">
      <h5><a href="/bmw/">BMW</a></h5>
      <span itemprop="name">BMW</span>
    </div>
  </div>
</body>
</html>
"#;

const BRAND_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<body>
  <div class="carmodels col23width clearfix">
    <div class="carmod clearfix">
      <h4>BMW 3 Series</h4>
      <div class="col3width fl"><span>1975 - Present</span></div>
    </div>
    <div class="carmod clearfix">
      <h4>BMW Z8</h4>
      <div class="col3width fl"><span>2000 - 2003</span></div>
    </div>
    <div class="carmod clearfix">
      <h4>Isetta</h4>
      <div class="col3width fl"><span>1955 - 1962</span></div>
    </div>
  </div>
  <div class="carmodels col23width clearfix">
    <div class="carmod clearfix">
      <h4>BMW M1</h4>
      <div class="col3width fl"><span>1978</span></div>
    </div>
    <div class="carmod clearfix">
      <h4>BMW Nazca</h4>
    </div>
  </div>
</body>
</html>
"#;

#[test]
fn test_landing_page_brand_listing() {
    let brands = parse_brand_listing(LANDING_PAGE, BASE_URL).unwrap();

    let names: Vec<_> = brands.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["ABARTH", "ALFA ROMEO", "BMW"]);

    assert_eq!(brands[0].url, "https://www.autoevolution.com/abarth/");
    // Relative hrefs resolve against the landing page.
    assert_eq!(brands[2].url, "https://www.autoevolution.com/bmw/");
}

#[test]
fn test_landing_page_without_listing_yields_no_brands() {
    let html = "<html><body><div class='container'>nothing here</div></body></html>";
    let brands = parse_brand_listing(html, BASE_URL).unwrap();
    assert!(brands.is_empty());
}

#[test]
fn test_brand_page_model_listing() {
    let models = parse_model_listing(BRAND_PAGE, "BMW", 2026).unwrap();

    let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();
    // Blocks span both containers, document order; the headingless block
    // is dropped, the prefixless heading survives verbatim.
    assert_eq!(names, vec!["3 Series", "Z8", "Isetta", "M1"]);
}

#[test]
fn test_brand_page_year_resolution() {
    let models = parse_model_listing(BRAND_PAGE, "BMW", 2026).unwrap();

    assert_eq!(models[0].start_year.as_deref(), Some("1975"));
    assert_eq!(models[0].end_year.as_deref(), Some("2026"));

    assert_eq!(models[1].start_year.as_deref(), Some("2000"));
    assert_eq!(models[1].end_year.as_deref(), Some("2003"));

    assert_eq!(models[3].start_year.as_deref(), Some("1978"));
    assert_eq!(models[3].end_year, None);
}

#[test]
fn test_year_range_grammar() {
    assert_eq!(
        parse_year_range("2010 - 2015", 2026),
        (Some("2010".to_string()), Some("2015".to_string()))
    );
    assert_eq!(
        parse_year_range("2010 - Present", 2026),
        (Some("2010".to_string()), Some("2026".to_string()))
    );
    assert_eq!(
        parse_year_range("2010", 2026),
        (Some("2010".to_string()), None)
    );
    assert_eq!(parse_year_range("", 2026), (None, None));
}

#[test]
fn test_brand_prefix_stripping() {
    assert_eq!(strip_brand_prefix("Ford Focus", "Ford"), "Focus");
    assert_eq!(strip_brand_prefix("Focus", "Ford"), "Focus");
}
