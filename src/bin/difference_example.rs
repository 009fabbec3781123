use brimage_colour::{Colour, Error, Palette};

fn main() -> Result<(), Error> {
    let grey_pair = (Colour::grey(10), Colour::grey(200));
    println!(
        "{} vs {}: {}",
        grey_pair.0,
        grey_pair.1,
        grey_pair.0.difference(&grey_pair.1)
    );

    let rgb_pair = (Colour::rgb(10, 20, 30), Colour::rgb(1, 2, 3));
    println!(
        "{} vs {}: {}",
        rgb_pair.0,
        rgb_pair.1,
        rgb_pair.0.difference(&rgb_pair.1)
    );

    // the left operand picks the metric
    let grey = Colour::grey(50);
    let rgba = Colour::rgba(100, 100, 100, 20);
    println!("{} vs {}: {}", grey, rgba, grey.difference(&rgba));
    println!("{} vs {}: {}", rgba, grey, rgba.difference(&grey));

    let palette = Palette::new(vec![
        "#000000".parse()?,
        "#ffffff".parse()?,
        "rgb:255,0,0".parse()?,
    ]);
    let colours = [Colour::rgb(200, 30, 40), Colour::rgb(20, 20, 20)];
    for matched in palette.match_all(&colours)? {
        println!(
            "nearest palette colour {} at index {}, difference {}",
            matched.colour, matched.index, matched.difference
        );
    }
    Ok(())
}
