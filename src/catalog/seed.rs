//! Built-in catalog shipped with the dashboard.

use rust_decimal::Decimal;
use crate::domain::aggregates::{Product, ProductStatus};

const IMAGE_BLUE: &str = "/devsecurity-uploads/9eb89923-e97b-4ca6-8235-7fb5c688e26f.png";
const IMAGE_YELLOW: &str = "/devsecurity-uploads/7e6a1db2-2b5a-438f-9e8f-8ccb0b7243aa.png";

pub(super) fn products() -> Vec<Product> {
    vec![
        Product::new("SCR32405", "American Sneakers Shoes Blue", "Zamoran", "Sneakers", Decimal::new(2868, 0))
            .with_size("38-45").with_stock(780).with_image(IMAGE_BLUE).with_year("2023").with_origin("USA")
            .with_description("Premium blue sneakers with comfortable fit and durable design"),
        Product::new("B324FDS2", "Blackian Sneakers Shoes Black", "Zamoran", "Sneakers", Decimal::new(2642, 0))
            .with_size("39-45").with_stock(706).with_discount(10).with_image(IMAGE_BLUE).with_year("2023").with_origin("Italy")
            .with_description("Sleek black sneakers with modern design and premium materials"),
        Product::new("C4D532S8", "Armway Sneakers Shoes Orange", "Armway", "Sneakers", Decimal::new(2628, 0))
            .with_size("37-45").with_stock(687).with_image(IMAGE_BLUE).with_year("2023").with_origin("France")
            .with_description("Vibrant orange sneakers with enhanced comfort and style"),
        Product::new("AE24E52G", "Gunnerian Sneakers Yellow Blue", "Zamoran", "Sneakers", Decimal::new(2436, 0))
            .with_size("38-45 EUR").with_stock(532).with_discount(25).with_image(IMAGE_YELLOW).with_year("2023").with_origin("Australia")
            .with_description("Yellow and blue athletic sneakers with superior cushioning"),
        Product::new("KL78P23R", "Running Pro Max White", "SportMax", "Running", Decimal::new(3250, 0))
            .with_size("38-46").with_stock(325).with_status(ProductStatus::OnHold).with_image(IMAGE_BLUE).with_year("2023").with_origin("Germany")
            .with_description("Professional running shoes with advanced technology for maximum performance"),
        Product::new("MN45Q87T", "Urban Walker Casual Brown", "UrbanStyle", "Casual", Decimal::new(1950, 0))
            .with_size("40-47").with_stock(158).with_image(IMAGE_BLUE).with_year("2022").with_origin("Spain")
            .with_description("Comfortable brown casual shoes for everyday urban wear"),
        Product::new("PQ38R72X", "Hiking Explorer Green", "NatureTrek", "Hiking", Decimal::new(3850, 0))
            .with_size("39-45").with_stock(94).with_image(IMAGE_BLUE).with_year("2023").with_origin("Switzerland")
            .with_description("Durable green hiking boots designed for challenging terrains"),
        Product::new("ST63W91Y", "Classic Formal Black", "Elegance", "Formal", Decimal::new(4250, 0))
            .with_size("40-46").with_stock(120).with_status(ProductStatus::OutOfStock).with_image(IMAGE_BLUE).with_year("2022").with_origin("Italy")
            .with_description("Premium black formal shoes for business and special occasions"),
    ]
}
