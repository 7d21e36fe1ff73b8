//! Renders the demo dataset to `columns.svg` and `lines.svg`.

use vizkit::prelude::*;

fn main() -> Result<()> {
    let data = demo_dataset();

    let columns = ColumnChart::new(600, 400).with_labels().render(&data)?;
    columns.write_to_file("columns.svg")?;

    let lines = LineChart::new(600, 400).render(&data)?;
    lines.write_to_file("lines.svg")?;

    let dollars = NumberFormat::currency(0);
    let (lo, hi) = extent(&data, vizkit::accessor::value).ok_or(Error::EmptyData)?;
    println!(
        "wrote columns.svg and lines.svg (income range {} to {})",
        dollars.format(lo),
        dollars.format(hi)
    );
    Ok(())
}
