//! Default menu, inserted on first start when the menu is empty.

use shared::models::MenuItemCreate;

fn item(name: &str, price: f64, category: &str, description: &str, image: &str) -> MenuItemCreate {
    MenuItemCreate {
        name: name.into(),
        price,
        category: category.into(),
        description: description.into(),
        image: format!("/menu/{image}"),
    }
}

pub fn default_menu() -> Vec<MenuItemCreate> {
    vec![
        // Pizza
        item("Veg Cheese Pizza", 109.0, "Pizza", "Classic veg pizza with loads of cheese", "veg-pizza.jpg"),
        item("Paneer Pizza", 119.0, "Pizza", "Topped with fresh paneer cubes", "paneer-pizza.jpg"),
        item("Schezwan Pizza", 119.0, "Pizza", "Spicy Schezwan sauce base", "schezwan-pizza.jpg"),
        item("Jain Pizza", 119.0, "Pizza", "No onion, no garlic special", "veg-pizza.jpg"),
        item("Corn Pizza", 125.0, "Pizza", "Sweet corn and cheese delight", "corn-pizza.jpg"),
        item("Mix Veg Pizza", 125.0, "Pizza", "Loaded with crunchy vegetables", "veg-pizza.jpg"),
        item("Paneer Schezwan Pizza", 135.0, "Pizza", "Spicy paneer fusion", "paneer-pizza.jpg"),
        item("Chocolate Pizza", 135.0, "Pizza", "Unique dessert pizza with chocolate sauce", "chocolate-pizza.jpg"),
        item("Delux Veg Pizza", 135.0, "Pizza", "Premium veggies and extra cheese", "veg-pizza.jpg"),
        item("MG's Special Pizza", 145.0, "Pizza", "Chef's special loaded pizza", "special-pizza.jpg"),
        // Burger
        item("Aloo Tikki Burger", 49.0, "Burger", "Classic potato patty burger", "burger.jpg"),
        item("Mix Veggie Burger", 59.0, "Burger", "Mixed vegetable patty", "burger.jpg"),
        item("Crunchy Burger", 65.0, "Burger", "Extra crispy patty", "burger.jpg"),
        item("Veg Cheese Burger", 65.0, "Burger", "Loaded with cheese slice", "burger.jpg"),
        item("Corn Burger", 69.0, "Burger", "Sweet corn patty burger", "burger.jpg"),
        item("Maharaja Burger", 75.0, "Burger", "Double patty giant burger", "burger.jpg"),
        item("MG's Special Burger", 80.0, "Burger", "Our signature special burger", "burger.jpg"),
        // Pasta, Maggie
        item("Red Pasta", 119.0, "Pasta", "Tangy tomato sauce pasta", "red-pasta.jpg"),
        item("White Pasta", 119.0, "Pasta", "Creamy white sauce pasta", "white-pasta.jpg"),
        item("Plain Maggie", 49.0, "Maggie", "Classic masala maggie", "maggi.jpg"),
        item("Cheese Maggie", 59.0, "Maggie", "Maggie loaded with cheese", "maggi.jpg"),
        // Sandwich
        item("Regular Cheese Sandwich", 49.0, "Sandwich", "Simple cheese sandwich", "sandwich.jpg"),
        item("Chocolate Sandwich", 49.0, "Sandwich", "Grilled with chocolate spread", "chocolate-sandwich.jpg"),
        item("Veg Cheese Sandwich", 55.0, "Sandwich", "Veggies and cheese grilled", "sandwich.jpg"),
        item("Jeera Toast", 39.0, "Sandwich", "Butter toast with cumin", "toast.jpg"),
        item("Grill Toast", 55.0, "Sandwich", "Crispy grilled butter toast", "toast.jpg"),
        item("Regular Sandwich Toast", 59.0, "Sandwich", "Classic toasted sandwich", "sandwich.jpg"),
        item("Masala Toast", 59.0, "Sandwich", "Spicy potato filling toast", "sandwich.jpg"),
        item("Cheese Sandwich Toast", 69.0, "Sandwich", "Toasted with cheese filling", "sandwich.jpg"),
        item("Paneer Schezwan Toast", 69.0, "Sandwich", "Spicy paneer filling", "sandwich.jpg"),
        // Fries, Snacks
        item("Plain Fries", 59.0, "Fries", "Salted crispy french fries", "fries.jpg"),
        item("Peri Peri Fries", 69.0, "Fries", "Spicy peri peri masala fries", "fries.jpg"),
        item("Tandoor Fries", 79.0, "Fries", "Tandoori flavored fries", "fries.jpg"),
        item("Potato Pops", 49.0, "Snacks", "Crispy potato bites", "nuggets.jpg"),
        item("Veg Nuggets", 59.0, "Snacks", "Golden fried veg nuggets", "nuggets.jpg"),
        item("Chilli Garlic Pops", 69.0, "Snacks", "Spicy garlic potato pops", "nuggets.jpg"),
        item("Cheese Corn Nuggets", 79.0, "Snacks", "Cheesy corn filling", "nuggets.jpg"),
        item("Potato Hips", 89.0, "Snacks", "Special potato snack", "nuggets.jpg"),
        // Momos
        item("Veg Momos", 79.0, "Momos", "Steamed veg dumplings", "momos.jpg"),
        item("Paneer Momos", 85.0, "Momos", "Paneer filled dumplings", "momos.jpg"),
        item("Schezwan Momos", 89.0, "Momos", "Spicy schezwan dumplings", "momos.jpg"),
        item("Cheese Corn Momos", 99.0, "Momos", "Cheesy corn dumplings", "momos.jpg"),
        // Shakes
        item("Cold Coffee", 59.0, "Shakes", "Classic blended cold coffee", "cold-coffee.jpg"),
        item("Chocolate Shake", 59.0, "Shakes", "Rich chocolate milk shake", "chocolate-shake.jpg"),
        item("Vanilla Milk Shake", 59.0, "Shakes", "Classic vanilla shake", "vanilla-shake.jpg"),
        item("Oreo Shake", 79.0, "Shakes", "Thick shake with Oreo crumbles", "oreo-shake.jpg"),
        item("Kit-Kat Shake", 79.0, "Shakes", "Crunchy KitKat shake", "kitkat-shake.jpg"),
        item("Cad-B", 79.0, "Shakes", "Thick chocolate dessert shake", "chocolate-shake.jpg"),
        item("Strawberry Shake", 79.0, "Shakes", "Fresh strawberry flavor", "strawberry-shake.jpg"),
        item("Mango Shake", 79.0, "Shakes", "Seasonal mango shake", "mango-shake.jpg"),
        item("Biscoff Milk Shake", 89.0, "Shakes", "Lotus Biscoff premium shake", "biscoff-shake.jpg"),
        // Hot
        item("Tea", 20.0, "Hot", "Hot masala chai", "tea.jpg"),
        item("Hot Coffee", 30.0, "Hot", "Hot brewed coffee", "coffee.jpg"),
        item("Bournvita", 50.0, "Hot", "Hot chocolate malt drink", "bournvita.jpg"),
        // Mocktails
        item("Cool Blue", 69.0, "Mocktails", "Refreshing blue lagoon", "blue-mocktail.jpg"),
        item("Blue Berry Lime", 69.0, "Mocktails", "Berry and lime fizzy drink", "mocktail.jpg"),
        item("Strawberry Mint Mojito", 79.0, "Mocktails", "Minty strawberry refresher", "red-mocktail.jpg"),
        item("Bubblegum Mocktail", 79.0, "Mocktails", "Sweet bubblegum flavor", "mocktail.jpg"),
        item("Classic Mojito Mint", 79.0, "Mocktails", "Lemon and mint classic", "mojito.jpg"),
        item("Blue Blossom Mocktail", 79.0, "Mocktails", "Floral blue drink", "blue-mocktail.jpg"),
        item("Sunrise Mocktail", 89.0, "Mocktails", "Orange and pomegranate mix", "orange-mocktail.jpg"),
        item("Green Sea Mocktail", 89.0, "Mocktails", "Green apple cooler", "green-mocktail.jpg"),
        item("Rainbow Mocktail", 99.0, "Mocktails", "Multi-layered fruit drink", "rainbow-mocktail.jpg"),
        // Combos
        item("Combo 1", 165.0, "Combos", "Mix Veg Burger + Fries + Cold Coffee", "combo.jpg"),
        item("Combo 2", 199.0, "Combos", "Veg Cheese Pizza + Potato Pops + Cold Coffee", "combo.jpg"),
        item("Couple Combo", 229.0, "Combos", "Veg Burger + Corn/Veg Pizza + Oreo Shake", "combo.jpg"),
        item("Party Combo", 399.0, "Combos", "Pizza + Momos + Burger + Pops + Fries + Coffee", "combo-big.jpg"),
    ]
}
