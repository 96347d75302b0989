//! Icons used across the pages, rendered with the Material Icons font.
//!
//! Content-driven pages pick an icon from a field of the fetched document (a
//! research category, a collateral type, a metric's position). Those lookups
//! are total: every input yields an icon, unknown ones the table's default.

use yew::{classes, html, Html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    ArrowRight,
    BarChart,
    Close,
    Coffee,
    Dollar,
    Eye,
    File,
    Heart,
    Layout,
    Menu,
    Monitor,
    Package,
    Palette,
    Share,
    Smartphone,
    Sparkles,
    Tablet,
    Target,
    TrendingDown,
    TrendingUp,
    Type,
    Users,
    Warning,
}

impl Icon {
    /// Material Icons ligature for this icon.
    pub const fn ligature(self) -> &'static str {
        match self {
            Icon::Award => "emoji_events",
            Icon::ArrowRight => "arrow_forward",
            Icon::BarChart => "bar_chart",
            Icon::Close => "close",
            Icon::Coffee => "local_cafe",
            Icon::Dollar => "attach_money",
            Icon::Eye => "visibility",
            Icon::File => "description",
            Icon::Heart => "favorite",
            Icon::Layout => "dashboard",
            Icon::Menu => "menu",
            Icon::Monitor => "desktop_windows",
            Icon::Package => "inventory_2",
            Icon::Palette => "palette",
            Icon::Share => "share",
            Icon::Smartphone => "smartphone",
            Icon::Sparkles => "auto_awesome",
            Icon::Tablet => "tablet_mac",
            Icon::Target => "track_changes",
            Icon::TrendingDown => "trending_down",
            Icon::TrendingUp => "trending_up",
            Icon::Type => "text_fields",
            Icon::Users => "group",
            Icon::Warning => "error_outline",
        }
    }

    pub fn view(self) -> Html {
        self.view_with_class("")
    }

    pub fn view_with_class(self, class: &'static str) -> Html {
        html! {
            <i class={classes!("material-icons", class)} aria-hidden="true">
                { self.ligature() }
            </i>
        }
    }
}

/// Icon for a research insight category. Unknown categories get a bar chart.
pub fn research_category_icon(category: &str) -> Icon {
    match category {
        "Demographics" => Icon::Target,
        "Brand Equity" => Icon::Heart,
        "Perception" => Icon::Eye,
        "Consumer Behavior" => Icon::TrendingUp,
        "Digital" => Icon::BarChart,
        "Values" => Icon::Heart,
        _ => Icon::BarChart,
    }
}

/// Icon for a marketing collateral type. Unknown types get a package.
pub fn collateral_type_icon(kind: &str) -> Icon {
    match kind {
        "packaging" | "product" | "environmental" => Icon::Package,
        "social" => Icon::Share,
        "print" | "documentation" => Icon::File,
        _ => Icon::Package,
    }
}

/// Icon for the impact metric at `index` in server order.
pub fn impact_metric_icon(index: usize) -> Icon {
    match index {
        0 => Icon::Award,
        1 => Icon::Users,
        2 => Icon::Heart,
        3 => Icon::TrendingUp,
        4 => Icon::Dollar,
        _ => Icon::TrendingUp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_categories_from_the_case_study_are_mapped() {
        assert_eq!(research_category_icon("Demographics"), Icon::Target);
        assert_eq!(research_category_icon("Perception"), Icon::Eye);
        assert_eq!(research_category_icon("Consumer Behavior"), Icon::TrendingUp);
        assert_eq!(research_category_icon("Values"), Icon::Heart);
    }

    #[test]
    fn unmapped_research_category_falls_back() {
        assert_eq!(research_category_icon("Sustainability"), Icon::BarChart);
        assert_eq!(research_category_icon(""), Icon::BarChart);
        assert_eq!(research_category_icon("demographics"), Icon::BarChart);
    }

    #[test]
    fn collateral_types_are_mapped_and_total() {
        assert_eq!(collateral_type_icon("social"), Icon::Share);
        assert_eq!(collateral_type_icon("documentation"), Icon::File);
        assert_eq!(collateral_type_icon("environmental"), Icon::Package);
        assert_eq!(collateral_type_icon("billboard"), Icon::Package);
    }

    #[test]
    fn metric_icons_follow_position() {
        let icons: Vec<Icon> = (0..8).map(impact_metric_icon).collect();
        assert_eq!(
            icons,
            vec![
                Icon::Award,
                Icon::Users,
                Icon::Heart,
                Icon::TrendingUp,
                Icon::Dollar,
                Icon::TrendingUp,
                Icon::TrendingUp,
                Icon::TrendingUp,
            ]
        );
    }

    #[test]
    fn ligatures_are_distinct() {
        use std::collections::HashSet;
        let all = [
            Icon::Award, Icon::ArrowRight, Icon::BarChart, Icon::Close, Icon::Coffee,
            Icon::Dollar, Icon::Eye, Icon::File, Icon::Heart, Icon::Layout, Icon::Menu,
            Icon::Monitor, Icon::Package, Icon::Palette, Icon::Share, Icon::Smartphone,
            Icon::Sparkles, Icon::Tablet, Icon::Target, Icon::TrendingDown, Icon::TrendingUp,
            Icon::Type, Icon::Users, Icon::Warning,
        ];
        let ligatures: HashSet<&str> = all.iter().map(|i| i.ligature()).collect();
        assert_eq!(ligatures.len(), all.len());
    }
}
