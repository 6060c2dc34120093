use shared::model::{Size, Tshirt};

/// The fixed six-item catalog the store starts from and resets back to.
pub fn seed_tshirts() -> Vec<Tshirt> {
    vec![
        Tshirt {
            id: 1,
            design_name: "Winging It".into(),
            size: Size::S,
            color: "Black".into(),
            price: 720,
            quantity: 10,
        },
        Tshirt {
            id: 2,
            design_name: "Winging It".into(),
            size: Size::M,
            color: "Black".into(),
            price: 720,
            quantity: 8,
        },
        Tshirt {
            id: 3,
            design_name: "Power to the Meeple".into(),
            size: Size::L,
            color: "Navy".into(),
            price: 720,
            quantity: 5,
        },
        Tshirt {
            id: 4,
            design_name: "The Board Gamer".into(),
            size: Size::XL,
            color: "Black".into(),
            price: 720,
            quantity: 7,
        },
        Tshirt {
            id: 5,
            design_name: "VIRTU Meeple".into(),
            size: Size::S,
            color: "Navy".into(),
            price: 720,
            quantity: 12,
        },
        Tshirt {
            id: 6,
            design_name: "Game Night".into(),
            size: Size::M,
            color: "Black".into(),
            price: 720,
            quantity: 9,
        },
    ]
}
