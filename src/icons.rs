// ABOUTME: Vector icon markup for the carousel's previous/next controls
// ABOUTME: Decorative only; injected into the arrow elements at construction

pub const ARROW_LEFT_PATH: &str = r##"<g transform="translate(-421.000000, -1195.000000)" fill="#e4e4e4"><path d="M423.429,1206.98 L434.686,1196.7 C435.079,1196.31 435.079,1195.67 434.686,1195.28 C434.293,1194.89 433.655,1194.89 433.263,1195.28 L421.282,1206.22 C421.073,1206.43 420.983,1206.71 420.998,1206.98 C420.983,1207.26 421.073,1207.54 421.282,1207.75 L433.263,1218.69 C433.655,1219.08 434.293,1219.08 434.686,1218.69 C435.079,1218.29 435.079,1217.66 434.686,1217.27 L423.429,1206.98"></path></g>"##;

pub const ARROW_RIGHT_PATH: &str = r##"<g transform="translate(-473.000000, -1195.000000)"><path d="M486.717,1206.22 L474.71,1195.28 C474.316,1194.89 473.678,1194.89 473.283,1195.28 C472.89,1195.67 472.89,1196.31 473.283,1196.7 L484.566,1206.98 L473.283,1217.27 C472.89,1217.66 472.89,1218.29 473.283,1218.69 C473.678,1219.08 474.316,1219.08 474.71,1218.69 L486.717,1207.75 C486.927,1207.54 487.017,1207.26 487.003,1206.98 C487.017,1206.71 486.927,1206.43 486.717,1206.22"></path></g>"##;

/// Wrap an icon's path group in the shared `<svg>` element.
pub fn arrow_svg(path_group: &str) -> String {
    format!(
        r##"<svg width="62px" viewBox="-5 0 24 24" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" xmlns:sketch="http://www.bohemiancoding.com/sketch/ns" fill="#e4e4e4">{}</svg>"##,
        path_group
    )
}
