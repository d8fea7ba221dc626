//! Catalog listing.

use std::io::{self, Write};

use guitarla_cart::Catalog;

/// Write one line per guitar: id, name, price.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    for guitar in catalog {
        writeln!(out, "{:>3}  {:<12} {:>8}", guitar.id, guitar.name, guitar.price)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_builtin() {
        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        list(&catalog, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().next().unwrap().contains("Lukather"));
        assert!(text.contains("Hazel"));
    }
}
