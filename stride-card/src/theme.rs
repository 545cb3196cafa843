//! Storefront palette and the stylesheet for the card components.

/// Core palette
pub struct Colors;

impl Colors {
    pub const WHITE: &'static str = "#ffffff";

    /// Primary accent, sale flags and sale prices
    pub const PRIMARY: &'static str = "#c5295d";

    /// Secondary accent, new-release flags
    pub const SECONDARY: &'static str = "#6868d9";

    /// Body text, names and regular prices
    pub const GRAY_900: &'static str = "#313235";

    /// Muted text, struck prices and color counts
    pub const GRAY_700: &'static str = "#60666c";
}

/// Font weights
pub struct Weights;

impl Weights {
    pub const NORMAL: u16 = 500;
    pub const MEDIUM: u16 = 600;
}

/// CSS for every class the card components emit. Serve it once per page
/// alongside the rendered markup.
pub fn stylesheet() -> String {
    format!(
        r#".shoe-grid {{
  display: flex;
  flex-wrap: wrap;
  gap: 32px;
}}

.shoe-card__link {{
  text-decoration: none;
  color: inherit;
  flex: 1 1 300px;
}}

.shoe-card__media {{
  position: relative;
}}

.shoe-card__image {{
  width: 100%;
  border-radius: 16px 16px 4px 4px;
}}

.shoe-card__flag {{
  position: absolute;
  top: 12px;
  right: -4px;
  padding: 8px 12px;
  border-radius: 2px;
  color: {white};
  font-size: 0.875rem;
  font-weight: {medium};
}}

.shoe-card__flag--new {{
  background-color: {secondary};
}}

.shoe-card__flag--sale {{
  background-color: {primary};
}}

.shoe-card__row {{
  display: flex;
  justify-content: space-between;
  font-size: 1rem;
}}

.shoe-card__name {{
  font-weight: {medium};
  color: {gray900};
}}

.shoe-card__prices {{
  display: flex;
  flex-direction: column;
  gap: 4px;
}}

.shoe-card__price {{
  font-weight: {normal};
  color: {gray900};
}}

.shoe-card__price--struck {{
  text-decoration: line-through;
  color: {gray700};
}}

.shoe-card__sale-price {{
  font-weight: {medium};
  color: {primary};
}}

.shoe-card__colors {{
  color: {gray700};
}}
"#,
        white = Colors::WHITE,
        primary = Colors::PRIMARY,
        secondary = Colors::SECONDARY,
        gray900 = Colors::GRAY_900,
        gray700 = Colors::GRAY_700,
        normal = Weights::NORMAL,
        medium = Weights::MEDIUM,
    )
}
