use std::io::{self, Write};

use storefront_core::{PageResult, Product};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{args::OutputFormat, web_client::Account};

pub struct ProductsFormatter {
    output: OutputFormat,
    stdout: StandardStream,
}

impl ProductsFormatter {
    pub fn new(output: OutputFormat) -> Self {
        Self {
            output,
            stdout: StandardStream::stdout(ColorChoice::Auto),
        }
    }

    pub fn print_page(&mut self, page: &PageResult) -> io::Result<()> {
        match self.output {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(page)?;
                writeln!(self.stdout, "{}", json)
            }
            OutputFormat::Plain => {
                for product in &page.products {
                    writeln!(self.stdout, "{}", plain_line(product))?;
                }
                Ok(())
            }
            OutputFormat::Pretty => self.print_pretty(page),
        }
    }

    fn print_pretty(&mut self, page: &PageResult) -> io::Result<()> {
        if page.products.is_empty() {
            writeln!(self.stdout, "No products match these filters.")?;
            return Ok(());
        }

        for product in &page.products {
            self.stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(self.stdout, "{}", product.name)?;
            self.stdout.reset()?;
            write!(self.stdout, "  ${:.2}  ", product.price)?;

            let (label, color) = if product.availability {
                ("In Stock", Color::Green)
            } else {
                ("Out of Stock", Color::Red)
            };
            self.stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(self.stdout, "{}", label)?;
            self.stdout.reset()?;

            writeln!(self.stdout, "  {}", stars(product.ratings))?;
            writeln!(self.stdout, "    {}", product.description)?;
        }

        self.stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(self.stdout, "\nPage {} of {}", page.current_page, page.total_pages)?;
        self.stdout.reset()?;

        if let Some(next) = &page.next_cursor {
            writeln!(self.stdout, "  next: --cursor {}", next)?;
        }
        if let Some(prev) = &page.prev_cursor {
            writeln!(self.stdout, "  prev: --cursor {}", prev)?;
        }

        Ok(())
    }
}

pub fn print_account(account: &Account, output: OutputFormat) -> io::Result<()> {
    let mut stdout = io::stdout();
    match output {
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(account)?),
        OutputFormat::Plain => writeln!(stdout, "{}", account.name),
        OutputFormat::Pretty => writeln!(stdout, "Logged in as {}", account.name),
    }
}

fn plain_line(product: &Product) -> String {
    format!(
        "{}\t{}\t{:.2}\t{}\t{}",
        product.id,
        product.name,
        product.price,
        if product.availability { "in-stock" } else { "arriving-soon" },
        product.ratings
    )
}

/// Whole stars plus the numeric rating, e.g. `★★★★ (4.6)`
fn stars(ratings: f64) -> String {
    let full = ratings.trunc().clamp(0.0, 5.0) as usize;
    format!("{} ({})", "★".repeat(full), ratings)
}
