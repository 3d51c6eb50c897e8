use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::Rgb;
use sha2::{Digest, Sha256};

use brandmark::{assets, SvgIconSpec};

const BADGE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"><rect x="4" y="4" width="16" height="16" rx="3" fill="#3fa7d6"/><circle cx="12" cy="12" r="4" fill="#ffffff"/></svg>"##;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_svg_icon_matches_fixture() {
    let spec = SvgIconSpec {
        size: 256,
        padding: 45,
        background: Rgb([16, 16, 16]),
    };
    let icon = assets::render_svg_icon(&spec, BADGE).expect("render svg icon");

    let mut png_data = Vec::new();
    icon.write_to(&mut Cursor::new(&mut png_data), image::ImageFormat::Png)
        .expect("encode png");
    let digest = hex::encode(Sha256::digest(&png_data));

    let expected_path = golden_path("svg_icon.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, expected.trim(), "PNG digest does not match golden");
}
