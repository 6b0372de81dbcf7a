use owo_colors::{OwoColorize, Stream};

use crate::utils::{fit_width, truncate_string};
use crate::view::ResolvedProduct;

/// Width of one grid card, in characters.
pub const CARD_WIDTH: usize = 26;

fn cyan(s: &str) -> String {
    s.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string()
}

fn green(s: &str) -> String {
    s.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
}

fn dimmed(s: &str) -> String {
    s.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
}

/// Lay products out as fixed-width cards, `columns` per row.
///
/// Each card is three lines: item and page, description, then case count,
/// price and a photo marker. Padding is applied before coloring so ANSI
/// codes never count toward the width.
pub fn format_grid(products: &[ResolvedProduct<'_>], columns: usize) -> String {
    let columns = columns.max(1);
    let inner = CARD_WIDTH - 2;
    let mut out = String::new();

    for row in products.chunks(columns) {
        let mut lines = [String::new(), String::new(), String::new()];

        for (n, resolved) in row.iter().enumerate() {
            let product = resolved.product;
            let gap = if n == 0 { "" } else { "  " };

            let page = format!("p.{}", product.page);
            let item_width = inner.saturating_sub(page.chars().count() + 1);
            lines[0].push_str(&format!(
                "{gap}{} {}",
                cyan(&fit_width(&format!("#{}", product.item), item_width)),
                dimmed(&page)
            ));

            lines[1].push_str(&format!("{gap}{}", fit_width(&product.description, inner)));

            let marker = if resolved.image.is_some() { "[photo]" } else { "[-]" };
            let count = format!("{}/cs", product.case_count);
            let retail = truncate_string(&product.retail, 8);
            let used = count.chars().count() + retail.chars().count() + marker.len() + 2;
            let spacer = " ".repeat(inner.saturating_sub(used));
            lines[2].push_str(&format!(
                "{gap}{count} {} {spacer}{}",
                green(&retail),
                dimmed(marker)
            ));
        }

        for line in &lines {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
