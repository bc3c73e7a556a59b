//! Plain-text rendering of the order-history page.

use crate::view::display::{order_cards, OrderCard};
use crate::view::state::ViewState;
use std::fmt;

pub const LOADING_TEXT: &str = "Завантаження...";
pub const PAGE_TITLE: &str = "Історія замовлень";
pub const NO_ORDERS_TEXT: &str = "У вас ще немає замовлень.";
pub const NO_ITEMS_TEXT: &str = "Немає товарів у замовленні.";

/// Renders the whole page for the given state.
pub fn render_page(state: &ViewState) -> String {
    Page(state).to_string()
}

struct Page<'a>(&'a ViewState);

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orders = match self.0 {
            ViewState::Loading => return writeln!(f, "{LOADING_TEXT}"),
            ViewState::Ready(orders) => orders,
        };

        writeln!(f, "{PAGE_TITLE}")?;
        if orders.is_empty() {
            return write!(f, "\n{NO_ORDERS_TEXT}\n");
        }

        for card in order_cards(orders) {
            writeln!(f)?;
            write_card(f, &card)?;
        }
        Ok(())
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &OrderCard) -> fmt::Result {
    writeln!(f, "Замовлення #{}  [{}]", card.title_id, card.status_label)?;
    if let Some(customer) = &card.customer {
        writeln!(f, "Замовник: {customer}")?;
    }
    writeln!(f, "Товари в замовленні:")?;
    if card.lines.is_empty() {
        return writeln!(f, "  {NO_ITEMS_TEXT}");
    }
    for line in &card.lines {
        writeln!(f, "  - {} ({})", line.name, line.image)?;
        if let Some(size) = &line.size {
            writeln!(f, "    Розмір: {size}")?;
        }
        writeln!(f, "    Кількість: {}", line.quantity)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AggregatedOrder, Order, OrderItem, OrderStatus};

    #[test]
    fn test_loading_page() {
        assert_eq!(render_page(&ViewState::Loading), "Завантаження...\n");
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(
            render_page(&ViewState::Ready(Vec::new())),
            "Історія замовлень\n\nУ вас ще немає замовлень.\n"
        );
    }

    #[test]
    fn test_populated_page() {
        let orders = vec![
            AggregatedOrder::new(
                Order::new(1, OrderStatus::Processing).with_user_name("Олена"),
                vec![
                    OrderItem::new(10, 1, "A-10", 2)
                        .with_name("Кеди")
                        .with_size("38")
                        .with_image("https://img/kedy.png"),
                    OrderItem::new(11, 1, "A-11", 1),
                ],
            ),
            AggregatedOrder::new(Order::new(2, OrderStatus::New), Vec::new()),
        ];

        let expected = "\
Історія замовлень

Замовлення #1  [В обробці]
Замовник: Олена
Товари в замовленні:
  - Кеди (https://img/kedy.png)
    Розмір: 38
    Кількість: 2
  - A-11 (https://via.placeholder.com/50)
    Кількість: 1

Замовлення #2  [Нове замовлення]
Товари в замовленні:
  Немає товарів у замовленні.
";
        assert_eq!(render_page(&ViewState::Ready(orders)), expected);
    }

    #[test]
    fn test_order_without_id_renders_blank_number() {
        let order = Order {
            order_id: None,
            status: OrderStatus::New,
            user_name: None,
        };
        let page = render_page(&ViewState::Ready(vec![AggregatedOrder::new(order, Vec::new())]));
        assert!(page.contains("Замовлення #  [Нове замовлення]"));
    }
}
