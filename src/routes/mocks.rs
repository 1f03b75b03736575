//! Canned meal-prep and cuisine payloads served when a backend is down.
//!
//! They match the backends' response shapes so the pages render the same
//! either way.

use serde_json::{json, Value};

pub fn batch_cooking_plan() -> Value {
    json!({
        "shopping_list": {
            "produce": ["Spinach (2 bags)", "Bell peppers (4)", "Onions (3)", "Garlic (1 head)", "Sweet potatoes (4)", "Broccoli (2 heads)"],
            "proteins": ["Chicken breast (2 lbs)", "Ground turkey (1 lb)", "Eggs (12)", "Canned beans (3 cans)"],
            "pantry": ["Brown rice (2 cups)", "Quinoa (1 cup)", "Olive oil", "Pasta (1 box)", "Canned tomatoes (2 cans)"],
            "dairy": ["Greek yogurt (1 container)", "Cheddar cheese (8 oz)"],
            "spices": ["Salt", "Pepper", "Cumin", "Paprika", "Italian seasoning"]
        },
        "cooking_plan": {
            "prep_steps": [
                { "step": 1, "description": "Preheat oven to 425°F. Chop all vegetables.", "time": "15 minutes" },
                { "step": 2, "description": "Roast sweet potatoes and bell peppers on one sheet pan.", "time": "25 minutes" },
                { "step": 3, "description": "Cook chicken breasts in oven on another sheet pan.", "time": "20 minutes" },
                { "step": 4, "description": "While items are in oven, cook brown rice and quinoa on stovetop.", "time": "30 minutes" },
                { "step": 5, "description": "Brown ground turkey with onions and spices.", "time": "10 minutes" },
                { "step": 6, "description": "Steam broccoli.", "time": "5 minutes" },
                { "step": 7, "description": "Assemble meal containers with protein, grain, and vegetables.", "time": "15 minutes" }
            ],
            "total_active_time": "45 minutes",
            "total_passive_time": "75 minutes"
        },
        "recipes": [
            {
                "name": "Sheet Pan Chicken & Vegetables",
                "ingredients": ["Chicken breast", "Bell peppers", "Sweet potatoes", "Olive oil", "Salt", "Pepper", "Paprika"],
                "storage_instructions": "Store in airtight container in refrigerator for up to 4 days.",
                "reheating_instructions": "Microwave for 2 minutes or until heated through.",
                "nutrition_info": { "calories": 350, "protein": "30g", "carbs": "25g", "fat": "12g" },
                "meal_category": "lunch/dinner"
            },
            {
                "name": "Turkey & Quinoa Bowl",
                "ingredients": ["Ground turkey", "Quinoa", "Onions", "Garlic", "Canned beans", "Spices"],
                "storage_instructions": "Store in airtight container in refrigerator for up to 4 days.",
                "reheating_instructions": "Microwave for 2 minutes or until heated through.",
                "nutrition_info": { "calories": 380, "protein": "28g", "carbs": "30g", "fat": "14g" },
                "meal_category": "lunch/dinner"
            }
        ],
        "weekly_schedule": {
            "Monday": { "breakfast": "Greek yogurt with fruit", "lunch": "Sheet Pan Chicken & Vegetables", "dinner": "Turkey & Quinoa Bowl" },
            "Tuesday": { "breakfast": "Scrambled eggs with veggies", "lunch": "Sheet Pan Chicken & Vegetables", "dinner": "Turkey & Quinoa Bowl" },
            "Wednesday": { "breakfast": "Greek yogurt with fruit", "lunch": "Turkey & Quinoa Bowl", "dinner": "Sheet Pan Chicken & Vegetables" },
            "Thursday": { "breakfast": "Scrambled eggs with veggies", "lunch": "Sheet Pan Chicken & Vegetables", "dinner": "Turkey & Quinoa Bowl" },
            "Friday": { "breakfast": "Greek yogurt with fruit", "lunch": "Turkey & Quinoa Bowl", "dinner": "Sheet Pan Chicken & Vegetables" },
            "Saturday": { "breakfast": "Weekend brunch - chef's choice", "lunch": "Leftovers or eating out", "dinner": "Leftovers or eating out" },
            "Sunday": { "breakfast": "Weekend brunch - chef's choice", "lunch": "Meal prep for the week", "dinner": "Sheet Pan Chicken & Vegetables" }
        },
        "tips": [
            "Cook grains in bulk at the beginning of the week",
            "Use sheet pans to cook multiple items at once",
            "Chop all vegetables at one time to save prep time later",
            "Invest in good quality containers for food storage",
            "Label containers with contents and date prepared"
        ]
    })
}

fn timed_step(step: u32, description: &str, time: &str, is_active: bool) -> Value {
    json!({ "step": step, "description": description, "time": time, "is_active": is_active })
}

pub fn time_optimized_recipes() -> Value {
    json!({
        "recipes": [
            {
                "name": "15-Minute Stir-Fry",
                "description": "A quick and versatile vegetable stir-fry that comes together in just 15 minutes.",
                "ingredients": [
                    "2 tbsp vegetable oil",
                    "1 bell pepper, sliced",
                    "1 cup broccoli florets",
                    "1 carrot, julienned",
                    "2 cloves garlic, minced",
                    "1 tbsp soy sauce",
                    "1 tbsp honey or maple syrup",
                    "1 tsp sesame oil",
                    "2 cups cooked rice or noodles"
                ],
                "instructions": [
                    timed_step(1, "Heat oil in a large skillet or wok over high heat.", "1 minute", true),
                    timed_step(2, "Add vegetables and stir-fry until crisp-tender.", "5 minutes", true),
                    timed_step(3, "Add garlic and cook until fragrant.", "1 minute", true),
                    timed_step(4, "Add soy sauce, honey, and sesame oil. Stir to combine.", "1 minute", true),
                    timed_step(5, "Serve over rice or noodles.", "2 minutes", true)
                ],
                "active_time": "10 minutes",
                "passive_time": "0 minutes",
                "total_time": "10 minutes",
                "nutrition_info": { "calories": 300, "protein": "5g", "carbs": "45g", "fat": "10g" },
                "efficiency_tips": [
                    "Use pre-cut vegetables to save time",
                    "Cook rice or noodles ahead of time and refrigerate",
                    "Double the recipe for leftovers"
                ]
            },
            {
                "name": "Quick Chickpea Curry",
                "description": "A flavorful curry that requires minimal hands-on time.",
                "ingredients": [
                    "1 tbsp olive oil",
                    "1 onion, diced",
                    "2 cloves garlic, minced",
                    "1 tbsp curry powder",
                    "1 can (15 oz) chickpeas, drained and rinsed",
                    "1 can (14 oz) diced tomatoes",
                    "1/2 cup coconut milk",
                    "Salt and pepper to taste",
                    "Fresh cilantro for garnish"
                ],
                "instructions": [
                    timed_step(1, "Heat oil in a large pot over medium heat.", "1 minute", true),
                    timed_step(2, "Add onion and cook until softened.", "5 minutes", true),
                    timed_step(3, "Add garlic and curry powder, cook until fragrant.", "1 minute", true),
                    timed_step(4, "Add chickpeas, tomatoes, and coconut milk. Bring to a simmer.", "3 minutes", true),
                    timed_step(5, "Simmer to develop flavors.", "5 minutes", false),
                    timed_step(6, "Season with salt and pepper, garnish with cilantro.", "1 minute", true)
                ],
                "active_time": "11 minutes",
                "passive_time": "5 minutes",
                "total_time": "16 minutes",
                "nutrition_info": { "calories": 350, "protein": "12g", "carbs": "40g", "fat": "15g" },
                "efficiency_tips": [
                    "Use pre-minced garlic",
                    "Make in larger batches and freeze portions",
                    "Serve with pre-cooked rice or naan bread"
                ]
            },
            {
                "name": "5-Minute Breakfast Smoothie Bowl",
                "description": "A nutritious breakfast that takes just 5 minutes to prepare.",
                "ingredients": [
                    "1 frozen banana",
                    "1/2 cup frozen berries",
                    "1/2 cup Greek yogurt",
                    "1/4 cup milk of choice",
                    "1 tbsp honey or maple syrup",
                    "Toppings: granola, nuts, fresh fruit, chia seeds"
                ],
                "instructions": [
                    timed_step(1, "Add banana, berries, yogurt, milk, and sweetener to a blender.", "1 minute", true),
                    timed_step(2, "Blend until smooth, adding more liquid if needed.", "2 minutes", true),
                    timed_step(3, "Pour into a bowl and add desired toppings.", "2 minutes", true)
                ],
                "active_time": "5 minutes",
                "passive_time": "0 minutes",
                "total_time": "5 minutes",
                "nutrition_info": { "calories": 300, "protein": "15g", "carbs": "50g", "fat": "5g" },
                "efficiency_tips": [
                    "Freeze bananas in advance when they're ripe",
                    "Prepare portion-sized bags of frozen fruit",
                    "Store premixed dry toppings"
                ]
            }
        ]
    })
}

fn steps(descriptions: &[&str]) -> Value {
    descriptions
        .iter()
        .zip(1..)
        .map(|(description, step)| json!({ "step": step, "description": description }))
        .collect()
}

pub fn transform_leftovers() -> Value {
    json!({
        "transformations": [
            {
                "name": "Roast Chicken to Chicken Quesadillas",
                "description": "Transform leftover roast chicken into quick and flavorful quesadillas.",
                "leftover_ingredients_used": ["Roast chicken", "Vegetables"],
                "additional_ingredients": ["Tortillas", "Cheese", "Salsa", "Sour cream", "Avocado"],
                "instructions": steps(&[
                    "Shred leftover chicken and chop any leftover vegetables.",
                    "Place tortilla in a pan, add cheese, chicken, and vegetables.",
                    "Top with another tortilla and cook until golden on both sides.",
                    "Slice and serve with salsa, sour cream, and avocado."
                ]),
                "prep_time": "5 minutes",
                "cooking_time": "5 minutes",
                "customization_tips": [
                    "Add beans for extra protein",
                    "Use any cheese you have on hand",
                    "Add hot sauce for spice"
                ]
            },
            {
                "name": "Rice Bowl Makeover",
                "description": "Turn leftover rice into a nutritious and satisfying bowl meal.",
                "leftover_ingredients_used": ["Cooked rice", "Any leftover protein"],
                "additional_ingredients": ["Fresh or frozen vegetables", "Egg", "Soy sauce or other sauce", "Sesame oil", "Green onions"],
                "instructions": steps(&[
                    "Heat oil in a pan and sauté any fresh vegetables.",
                    "Add leftover rice and protein, breaking up any clumps.",
                    "Push ingredients to one side, crack egg into empty space and scramble.",
                    "Mix everything together, add sauce, and garnish with green onions."
                ]),
                "prep_time": "5 minutes",
                "cooking_time": "10 minutes",
                "customization_tips": [
                    "Use any sauce you prefer",
                    "Add kimchi for a Korean-inspired version",
                    "Top with a fried egg instead of scrambled"
                ]
            },
            {
                "name": "Pasta Frittata",
                "description": "Transform leftover pasta into a hearty Italian-inspired frittata.",
                "leftover_ingredients_used": ["Cooked pasta", "Pasta sauce"],
                "additional_ingredients": ["Eggs", "Milk", "Cheese", "Fresh herbs", "Salt and pepper"],
                "instructions": steps(&[
                    "Whisk eggs with milk, salt, and pepper.",
                    "Mix in leftover pasta and any sauce.",
                    "Pour into an oven-safe pan, top with cheese.",
                    "Cook on stovetop until edges set, then finish in oven until fully set."
                ]),
                "prep_time": "5 minutes",
                "cooking_time": "15 minutes",
                "customization_tips": [
                    "Add any vegetables you have on hand",
                    "Use any cheese that melts well",
                    "Serve with a simple side salad"
                ]
            }
        ],
        "general_tips": [
            "Think of leftovers as pre-prepped ingredients to save time",
            "Keep basic pantry staples on hand for quick transformations",
            "Consider texture when reheating - some items may need to be crisped up",
            "Add fresh elements to leftover dishes for contrast and freshness",
            "Don't be afraid to mix cuisines for fusion dishes"
        ]
    })
}

/// Canned cuisine for `region` (italian, japanese, mexican or indian, in
/// any case); anything else gets the Italian one.
pub fn cuisine(region: Option<&str>) -> Value {
    match region.map(str::to_lowercase).as_deref() {
        Some("japanese") => japanese(),
        Some("mexican") => mexican(),
        Some("indian") => indian(),
        _ => italian(),
    }
}

fn unsplash(topic: &str) -> String {
    format!("https://source.unsplash.com/random/300x200/?{}", topic)
}

fn italian() -> Value {
    json!({
        "cuisine_name": "Italian",
        "region": "Southern Europe",
        "description": "Italian cuisine is a Mediterranean cuisine consisting of the ingredients, recipes and cooking techniques developed across the Italian Peninsula. Italian cuisine is known for its regional diversity, abundance of difference in taste, and is one of the most popular in the world.",
        "key_ingredients": ["Tomatoes", "Olive Oil", "Pasta", "Cheeses (Parmesan, Mozzarella)", "Basil", "Garlic"],
        "key_spices": ["Basil", "Oregano", "Rosemary", "Thyme", "Red Pepper Flakes"],
        "cultural_significance": "Food is an integral part of Italian culture. Family gatherings often revolve around meals, and recipes are passed down through generations, preserving traditions.",
        "history": "Italian cuisine developed over centuries, influenced by Greek, Roman, Byzantine and Arab civilizations. The discovery of the New World brought new ingredients like tomatoes and peppers that transformed the cuisine.",
        "popular_dishes": [
            {
                "id": "pasta-carbonara",
                "name": "Pasta Carbonara",
                "origin": "Rome, Italy",
                "description": "A rich, creamy pasta dish made with eggs, cheese, pancetta, and black pepper.",
                "ingredients": ["Spaghetti", "Eggs", "Pancetta or Guanciale", "Pecorino Romano cheese", "Black pepper", "Salt"],
                "instructions": [
                    "Bring a large pot of salted water to boil and cook spaghetti until al dente.",
                    "While pasta cooks, sauté pancetta until crispy.",
                    "In a bowl, whisk eggs and grated cheese together.",
                    "Drain pasta and immediately add to the pan with pancetta. Remove from heat.",
                    "Quickly stir in the egg mixture, creating a creamy sauce.",
                    "Season with freshly ground black pepper and serve immediately."
                ],
                "prep_time": "10 minutes",
                "cook_time": "15 minutes",
                "difficulty": "Intermediate",
                "tags": ["Pasta", "Dinner", "Authentic"],
                "image_url": unsplash("carbonara")
            },
            {
                "id": "margherita-pizza",
                "name": "Pizza Margherita",
                "origin": "Naples, Italy",
                "description": "A classic Neapolitan pizza topped with tomatoes, fresh mozzarella cheese, fresh basil, salt, and extra-virgin olive oil.",
                "ingredients": ["Pizza dough", "San Marzano tomatoes", "Fresh mozzarella cheese", "Fresh basil", "Extra virgin olive oil", "Salt"],
                "instructions": [
                    "Preheat oven to 500°F (260°C) with a pizza stone if available.",
                    "Stretch the pizza dough into a thin round.",
                    "Top with crushed tomatoes, leaving a border for the crust.",
                    "Tear fresh mozzarella into pieces and distribute over the pizza.",
                    "Bake for 8-10 minutes until crust is golden and cheese is bubbling.",
                    "Remove from oven, top with fresh basil leaves and a drizzle of olive oil."
                ],
                "prep_time": "20 minutes",
                "cook_time": "10 minutes",
                "difficulty": "Easy",
                "tags": ["Pizza", "Vegetarian", "Traditional"],
                "image_url": unsplash("pizza")
            }
        ]
    })
}

fn japanese() -> Value {
    json!({
        "cuisine_name": "Japanese",
        "region": "East Asia",
        "description": "Japanese cuisine encompasses the regional and traditional foods of Japan. The traditional cuisine of Japan is based on rice with miso soup and other dishes, with an emphasis on seasonal ingredients and simple presentation.",
        "key_ingredients": ["Rice", "Seafood", "Nori (Seaweed)", "Soy Sauce", "Miso", "Tofu"],
        "key_spices": ["Wasabi", "Shiso", "Sansho pepper", "Yuzu", "Ginger"],
        "cultural_significance": "Japanese cuisine is deeply tied to the country's cultural identity and traditions. The emphasis on seasonality, presentation, and respect for ingredients reflects broader Japanese cultural values.",
        "history": "Japanese cuisine has evolved over centuries, with influences from China and Korea. The country's isolation policy during the Edo period (1603-1868) allowed for the development of distinctive culinary traditions.",
        "popular_dishes": [
            {
                "id": "sushi-rolls",
                "name": "Sushi Rolls (Maki)",
                "origin": "Japan",
                "description": "Sushi rolls consist of vinegared rice and various fillings wrapped in nori seaweed.",
                "ingredients": ["Sushi rice", "Nori sheets", "Cucumber", "Avocado", "Fresh fish (salmon, tuna)", "Soy sauce", "Wasabi", "Pickled ginger"],
                "instructions": [
                    "Prepare sushi rice by mixing cooked rice with rice vinegar, sugar, and salt.",
                    "Place a nori sheet on a bamboo mat, shiny side down.",
                    "Spread rice evenly over nori, leaving a 1-inch margin at the top.",
                    "Place fillings in a line across the center of the rice.",
                    "Roll using the bamboo mat, applying gentle pressure.",
                    "Cut into 6-8 pieces using a wet, sharp knife.",
                    "Serve with soy sauce, wasabi, and pickled ginger."
                ],
                "prep_time": "30 minutes",
                "cook_time": "20 minutes",
                "difficulty": "Intermediate",
                "tags": ["Seafood", "Rice", "Traditional"],
                "image_url": unsplash("sushi")
            },
            {
                "id": "ramen",
                "name": "Tonkotsu Ramen",
                "origin": "Fukuoka, Japan",
                "description": "A rich, pork-based noodle soup with a creamy, hearty broth and various toppings.",
                "ingredients": ["Pork bones", "Ramen noodles", "Chashu (braised pork belly)", "Soft-boiled eggs", "Green onions", "Nori", "Bean sprouts", "Garlic"],
                "instructions": [
                    "Simmer pork bones for 8-12 hours to create a rich, milky broth.",
                    "Prepare toppings: slice chashu, marinate soft-boiled eggs, chop green onions.",
                    "Cook ramen noodles according to package instructions.",
                    "Place cooked noodles in a bowl and ladle hot broth over them.",
                    "Arrange toppings artfully on top of the soup.",
                    "Serve immediately while hot."
                ],
                "prep_time": "1 hour",
                "cook_time": "12 hours",
                "difficulty": "Advanced",
                "tags": ["Soup", "Noodles", "Comfort Food"],
                "image_url": unsplash("ramen")
            }
        ]
    })
}

fn mexican() -> Value {
    json!({
        "cuisine_name": "Mexican",
        "region": "North America",
        "description": "Mexican cuisine is primarily a fusion of indigenous Mesoamerican cooking with European elements added after the Spanish conquest. Native staples include corn, beans, avocados, tomatoes, and chili peppers, alongside rice, meat, and various herbs and spices.",
        "key_ingredients": ["Corn", "Beans", "Chili Peppers", "Tomatoes", "Avocados", "Tortillas"],
        "key_spices": ["Cumin", "Oregano", "Cilantro", "Chipotle", "Ancho chili", "Cinnamon"],
        "cultural_significance": "Food in Mexico is a vibrant expression of culture and history, playing a central role in celebrations, festivals, and daily life. Mexican cuisine was recognized by UNESCO as an Intangible Cultural Heritage of Humanity.",
        "history": "Mexican cuisine dates back to Mesoamerican times with staples like corn, beans, and chili peppers. The Spanish conquest introduced new ingredients such as dairy, wheat, and various meats, creating the fusion cuisine known today.",
        "popular_dishes": [
            {
                "id": "tacos-al-pastor",
                "name": "Tacos Al Pastor",
                "origin": "Central Mexico",
                "description": "Spit-grilled pork tacos inspired by Lebanese shawarma, marinated with spices and served with pineapple, onions, and cilantro.",
                "ingredients": ["Pork shoulder", "Dried guajillo chiles", "Achiote paste", "Pineapple", "Corn tortillas", "White onion", "Cilantro", "Lime"],
                "instructions": [
                    "Marinate sliced pork in a mixture of dried chiles, achiote, pineapple, and spices for at least 4 hours.",
                    "Cook the marinated meat on a vertical spit or grill until cooked through and slightly charred.",
                    "Warm corn tortillas on a hot comal or griddle.",
                    "Slice the cooked meat thinly and place on tortillas.",
                    "Top with diced pineapple, chopped onion, and cilantro.",
                    "Serve with lime wedges and salsa of choice."
                ],
                "prep_time": "4 hours",
                "cook_time": "1 hour",
                "difficulty": "Intermediate",
                "tags": ["Tacos", "Street Food", "Pork"],
                "image_url": unsplash("tacos")
            },
            {
                "id": "mole-poblano",
                "name": "Mole Poblano",
                "origin": "Puebla, Mexico",
                "description": "A rich, complex sauce made with chocolate and chili peppers, typically served over chicken or turkey.",
                "ingredients": ["Chicken", "Dried chiles (ancho, pasilla, mulato)", "Mexican chocolate", "Tomatoes", "Onion", "Garlic", "Sesame seeds", "Peanuts", "Almonds", "Cinnamon", "Cloves"],
                "instructions": [
                    "Toast the dried chiles, nuts, and seeds until fragrant.",
                    "Puree toasted ingredients with tomatoes, onions, garlic, and spices.",
                    "Cook the puree in oil until it thickens.",
                    "Add chicken broth and Mexican chocolate, simmer until sauce thickens.",
                    "In a separate pot, cook chicken until tender.",
                    "Pour the mole sauce over the chicken and simmer together briefly.",
                    "Serve with rice and warm tortillas."
                ],
                "prep_time": "1 hour",
                "cook_time": "2 hours",
                "difficulty": "Advanced",
                "tags": ["Traditional", "Main Course", "Spicy"],
                "image_url": unsplash("mole")
            }
        ]
    })
}

fn indian() -> Value {
    json!({
        "cuisine_name": "Indian",
        "region": "South Asia",
        "description": "Indian cuisine consists of a variety of regional and traditional dishes native to the Indian subcontinent. Given the diversity of soil, climate, culture, ethnic groups, and occupations, these cuisines vary substantially and use locally available spices, herbs, vegetables, and fruits.",
        "key_ingredients": ["Rice", "Lentils", "Chickpeas", "Paneer (fresh cheese)", "Vegetables", "Yogurt"],
        "key_spices": ["Cumin", "Turmeric", "Cardamom", "Cinnamon", "Cloves", "Garam Masala", "Coriander"],
        "cultural_significance": "Food in India is deeply connected to culture, religion, and tradition. Many religious practices include fasting and feasting, and food plays a central role in festivals and celebrations.",
        "history": "Indian cuisine has evolved over thousands of years, influenced by various civilizations and trade routes. The cuisine has also influenced and been influenced by neighboring regions and colonial powers.",
        "popular_dishes": [
            {
                "id": "butter-chicken",
                "name": "Butter Chicken (Murgh Makhani)",
                "origin": "Delhi, India",
                "description": "A rich, creamy tomato-based curry with tender chicken pieces, originally created in the 1950s.",
                "ingredients": ["Chicken thighs", "Yogurt", "Tomatoes", "Butter", "Cream", "Garam masala", "Cumin", "Turmeric", "Ginger", "Garlic", "Kashmiri chili powder"],
                "instructions": [
                    "Marinate chicken in yogurt, lemon juice, and spices for at least 2 hours.",
                    "Grill or bake the marinated chicken until partially cooked.",
                    "In a large pot, sauté onions, ginger, and garlic until golden.",
                    "Add tomatoes and spices, cook until tomatoes break down.",
                    "Blend the sauce until smooth, then return to pot.",
                    "Add butter, cream, and the partially cooked chicken.",
                    "Simmer until chicken is fully cooked and sauce thickens.",
                    "Garnish with cream and fresh coriander leaves."
                ],
                "prep_time": "2 hours",
                "cook_time": "45 minutes",
                "difficulty": "Intermediate",
                "tags": ["Curry", "Chicken", "Rich"],
                "image_url": unsplash("butter-chicken")
            },
            {
                "id": "vegetable-biryani",
                "name": "Vegetable Biryani",
                "origin": "Indian Subcontinent",
                "description": "A fragrant rice dish cooked with mixed vegetables, aromatic spices, and herbs.",
                "ingredients": ["Basmati rice", "Mixed vegetables", "Onions", "Yogurt", "Ghee", "Ginger-garlic paste", "Green chilies", "Biryani masala", "Saffron", "Mint leaves", "Coriander leaves"],
                "instructions": [
                    "Partially cook basmati rice with whole spices and set aside.",
                    "Sauté onions until golden brown, then add ginger-garlic paste and green chilies.",
                    "Add mixed vegetables and biryani masala, cook until vegetables are tender.",
                    "Layer the vegetable mixture and partially cooked rice in a heavy-bottomed pot.",
                    "Top with fried onions, mint leaves, and saffron-infused milk.",
                    "Seal the pot with dough or foil and cook on low heat for 20-25 minutes.",
                    "Mix gently before serving, garnish with fresh coriander leaves."
                ],
                "prep_time": "30 minutes",
                "cook_time": "1 hour",
                "difficulty": "Intermediate",
                "tags": ["Rice", "Vegetarian", "One-pot"],
                "image_url": unsplash("biryani")
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftover_steps_are_numbered() {
        let mock = transform_leftovers();
        let first = &mock["transformations"][0]["instructions"];

        assert_eq!(first[0]["step"], 1);
        assert_eq!(first[3]["step"], 4);
        assert_eq!(mock["general_tips"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_batch_plan_shape() {
        let mock = batch_cooking_plan();

        assert_eq!(mock["cooking_plan"]["prep_steps"].as_array().map(Vec::len), Some(7));
        assert_eq!(mock["weekly_schedule"]["Sunday"]["lunch"], "Meal prep for the week");
        assert_eq!(time_optimized_recipes()["recipes"][1]["instructions"][4]["is_active"], false);
    }

    #[test]
    fn test_cuisine_lookup_ignores_case() {
        assert_eq!(cuisine(Some("JAPANESE"))["cuisine_name"], "Japanese");
        assert_eq!(cuisine(Some("indian"))["popular_dishes"][0]["id"], "butter-chicken");
        assert_eq!(cuisine(Some("Atlantis"))["cuisine_name"], "Italian");
        assert_eq!(
            cuisine(None)["popular_dishes"][1]["image_url"],
            "https://source.unsplash.com/random/300x200/?pizza"
        );
    }
}
