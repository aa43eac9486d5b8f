use zenhist::{ColorHistogram, HistogramConfig, PixelBuffer, SampleMethod, pack_rgba};

const BG: u32 = pack_rgba(40, 40, 40, 255);
const LOGO: u32 = pack_rgba(20, 90, 220, 255);

/// 256x256 background with a small `size`x`size` logo in the top-left box.
fn logo_image(size: usize) -> PixelBuffer {
    let (w, h) = (256, 256);
    let mut colors = vec![BG; w * h];
    for y in 10..10 + size {
        for x in 10..10 + size {
            colors[y * w + x] = LOGO;
        }
    }
    PixelBuffer::from_packed(colors, w, h).unwrap()
}

/// Every pixel a different color.
fn noise_image(width: usize, height: usize) -> PixelBuffer {
    let colors = (0..(width * height) as u32)
        .map(|i| pack_rgba(i as u8, (i >> 8) as u8, 200, 255))
        .collect();
    PixelBuffer::from_packed(colors, width, height).unwrap()
}

#[test]
fn locally_dense_color_survives() {
    // 9 logo pixels out of 65536; the logo hue group sees 9 pixels, more than
    // the retention threshold of 4, so only box density can keep it
    let image = logo_image(3);
    let mut hist = ColorHistogram::new(SampleMethod::Boxed, 1);
    hist.sample(&image);

    assert_eq!(hist.histogram()[&LOGO], 9);
    let stats = hist.hue_stats();
    assert!(stats.rare_groups().all(|g| stats.group_count(g) == 0));

    let candidates = hist.importance_sorted_colors().unwrap();
    assert_eq!(candidates, vec![BG, LOGO]);
}

#[test]
fn globally_known_colors_count_every_pixel() {
    // promotion carries the local count over, so no BG pixel goes missing
    let image = logo_image(3);
    let mut hist = ColorHistogram::new(SampleMethod::Boxed, 1);
    hist.sample(&image);
    assert_eq!(hist.histogram()[&BG], 256 * 256 - 9);
}

#[test]
fn sparse_noise_is_dropped() {
    let image = noise_image(64, 64);
    let config = HistogramConfig::new()
        .method(SampleMethod::Boxed)
        .colors(0);
    let mut hist = ColorHistogram::with_config(&config).unwrap();
    hist.sample(&image);
    assert!(hist.is_empty());
    assert_eq!(hist.importance_sorted_colors(), None);
}

#[test]
fn rare_hue_injected_into_map() {
    // a lone red pixel never reaches local density but its hue group stays rare
    let red = pack_rgba(220, 30, 30, 255);
    let mut colors = vec![BG; 64 * 64];
    colors[100] = red;
    let image = PixelBuffer::from_packed(colors, 64, 64).unwrap();

    let mut hist = ColorHistogram::new(SampleMethod::Boxed, 1);
    hist.sample(&image);

    assert_eq!(hist.histogram()[&red], 1);
    assert_eq!(hist.importance_sorted_colors(), Some(vec![BG, red]));
}

#[test]
fn edge_boxes_use_minimum_threshold() {
    // 65x1: a full-width box and a 1x1 edge box. The edge color appears once
    // and can never reach the threshold of 2.
    let edge = pack_rgba(7, 7, 7, 255);
    let mut colors = vec![BG; 65];
    colors[64] = edge;
    let image = PixelBuffer::from_packed(colors, 65, 1).unwrap();

    let config = HistogramConfig::new()
        .method(SampleMethod::Boxed)
        .colors(0);
    let mut hist = ColorHistogram::with_config(&config).unwrap();
    hist.sample(&image);

    assert_eq!(hist.histogram()[&BG], 64);
    assert!(!hist.histogram().contains_key(&edge));
}

#[test]
fn boxes_are_independent() {
    // 4x2 image, 2x2 boxes: the color shows up once in each box and is
    // never promoted even though it appears twice overall
    let c = pack_rgba(1, 2, 3, 255);
    let colors = vec![c, BG, BG, c, BG, BG, BG, BG];
    let image = PixelBuffer::from_packed(colors, 4, 2).unwrap();

    let config = HistogramConfig::new()
        .method(SampleMethod::Boxed)
        .colors(0)
        .box_size(2, 2);
    let mut hist = ColorHistogram::with_config(&config).unwrap();
    hist.sample(&image);

    assert!(!hist.histogram().contains_key(&c));
    assert_eq!(hist.histogram()[&BG], 6);
}

#[test]
fn global_and_boxed_agree_on_dense_image() {
    let mut colors = Vec::new();
    for y in 0..128usize {
        for x in 0..128usize {
            let v = ((x / 32) * 4 + y / 32) as u8;
            colors.push(pack_rgba(v * 10, 100, 255 - v * 10, 255));
        }
    }
    let image = PixelBuffer::from_packed(colors, 128, 128).unwrap();

    let config = HistogramConfig::new().colors(0);
    let mut global = ColorHistogram::with_config(&config).unwrap();
    global.sample(&image);
    let boxed_config = config.clone().method(SampleMethod::Boxed);
    let mut boxed = ColorHistogram::with_config(&boxed_config).unwrap();
    boxed.sample(&image);

    assert_eq!(global.histogram(), boxed.histogram());
}
