use colored::Colorize;
use futures::future::join_all;
use std::path::PathBuf;
use typed_snippets::concat_arrays;
use typed_snippets::day::{day_type, Day};
use typed_snippets::logging::init_logging;
use typed_snippets::products::most_expensive;
use typed_snippets::ratings::filter_by_min_rating;
use typed_snippets::report::{set_color, Report};
use typed_snippets::square::square_after;
use typed_snippets::text::format_string;
use typed_snippets::value::{process_value, Value};
use typed_snippets::vehicle::{sample_car, Describe};
use typed_snippets::TourConfig;

fn load_config() -> Result<TourConfig, typed_snippets::ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => TourConfig::load(&PathBuf::from(path)),
        None => Ok(TourConfig::default()),
    }
}

async fn run_tour(config: &TourConfig) -> Report {
    let mut report = Report::new();

    report
        .section("Case Formatting")
        .ok("format_string(\"Hello\", Some(false))", format_string("Hello", Some(false)))
        .ok("format_string(\"Hello\", None)", format_string("Hello", None));

    report
        .section("Filtering by Rating")
        .json("books", &config.books)
        .json(
            &format!("rating >= {}", config.min_rating),
            &filter_by_min_rating(&config.books, config.min_rating),
        );

    let joined: Vec<i32> = concat_arrays![[1, 2], [3, 4], [5]];
    report
        .section("Generic Concatenation")
        .json("concat([1, 2], [3, 4], [5])", &joined);

    let car = sample_car();
    report
        .section("Vehicle and Car")
        .ok("car.info()", car.info())
        .ok("car.model_info()", car.model_info());

    report.section("Text-or-Number Transform");
    for value in [Value::from("abc"), Value::from(50)] {
        let label = format!("process_value({})", typed_snippets::report::to_json(&value));
        report.ok(&label, process_value(&value));
    }

    report
        .section("Most Expensive Product")
        .json("most_expensive(products)", &most_expensive(&config.products))
        .json("most_expensive([])", &most_expensive(&[]));

    report.section("Weekday Classifier");
    for day in Day::ALL {
        report.ok(&format!("day_type({day})"), day_type(day));
    }

    report.section("Delayed Squaring");
    let delay = config.square_delay();
    let results = join_all(
        config
            .square_inputs
            .iter()
            .map(|n| async move { (*n, square_after(*n, delay).await) }),
    )
    .await;
    for (n, result) in results {
        let label = format!("square({n})");
        match result {
            Ok(squared) => report.ok(&label, squared),
            Err(err) => report.err(&label, err),
        };
    }

    report
}

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "config error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    set_color(config.color);
    init_logging(&config);

    let report = run_tour(&config).await;
    print!("{}", report.render());
    println!("\n{}", format!("All {} snippets complete!", report.section_count()).green());
}

#[cfg(test)]
mod tests {
    use super::*;
    use typed_snippets::products::Product;
    use typed_snippets::ratings::Book;

    fn line_for<'a>(report: &'a Report, label: &str) -> &'a str {
        let prefix = format!("  {label} => ");
        report
            .lines()
            .iter()
            .find(|line| line.starts_with(&prefix))
            .unwrap_or_else(|| panic!("no line for {label}"))
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_tour() {
        set_color(false);
        let report = run_tour(&TourConfig::default()).await;

        assert_eq!(report.section_count(), 8);
        assert_eq!(line_for(&report, "square(4)"), "  square(4) => 16");
        assert_eq!(
            line_for(&report, "square(-3)"),
            "  square(-3) => error: Negative number not allowed"
        );
        assert_eq!(line_for(&report, "most_expensive([])"), "  most_expensive([]) => null");
        assert_eq!(
            line_for(&report, "most_expensive(products)"),
            r#"  most_expensive(products) => {"name":"Pen","price":100.0}"#
        );
        assert_eq!(line_for(&report, "day_type(Sunday)"), "  day_type(Sunday) => Weekend");
        assert_eq!(
            line_for(&report, "concat([1, 2], [3, 4], [5])"),
            "  concat([1, 2], [3, 4], [5]) => [1,2,3,4,5]"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_tour_uses_configured_records() {
        set_color(false);
        let config = TourConfig {
            books: vec![Book::new("Low", 2.0), Book::new("High", 4.5)],
            products: vec![Product::new("Lamp", 30.0), Product::new("Desk", 80.0)],
            square_inputs: vec![3.0],
            ..TourConfig::default()
        };
        let report = run_tour(&config).await;

        assert_eq!(
            line_for(&report, "rating >= 4"),
            r#"  rating >= 4 => [{"title":"High","rating":4.5}]"#
        );
        assert_eq!(
            line_for(&report, "most_expensive(products)"),
            r#"  most_expensive(products) => {"name":"Desk","price":80.0}"#
        );
        assert_eq!(line_for(&report, "square(3)"), "  square(3) => 9");
    }
}
