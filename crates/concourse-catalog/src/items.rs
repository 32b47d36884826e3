//! [`CatalogItem`] bindings for the two catalog entry types.

use concourse_core::entries::{
    NewRestaurant, NewShop, Restaurant, RestaurantPatch, Shop, ShopPatch,
};

use crate::store::{CatalogItem, Facet};

impl CatalogItem for Restaurant {
    type Draft = NewRestaurant;
    type Patch = RestaurantPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_recommended(&self) -> bool {
        self.recommended
    }

    fn facet(&self, facet: Facet) -> &str {
        match facet {
            Facet::Category => &self.cuisine,
            Facet::Price => &self.price,
            Facet::Location => &self.location,
        }
    }

    fn from_draft(id: u64, draft: NewRestaurant) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            rating: draft.rating,
            distance: draft.distance,
            cuisine: draft.cuisine,
            price: draft.price,
            location: draft.location,
            hours: draft.hours,
            phone: draft.phone,
            website: draft.website,
            image: draft.image,
            recommended: draft.recommended,
            active: draft.active,
        }
    }

    fn apply_patch(&mut self, patch: RestaurantPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(distance) = patch.distance {
            self.distance = distance;
        }
        if let Some(cuisine) = patch.cuisine {
            self.cuisine = cuisine;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(recommended) = patch.recommended {
            self.recommended = recommended;
        }
    }

    // Travelers search restaurants by zone as well ("concourse a").
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_str(),
            self.cuisine.as_str(),
            self.location.as_str(),
        ]
    }
}

impl CatalogItem for Shop {
    type Draft = NewShop;
    type Patch = ShopPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_recommended(&self) -> bool {
        self.recommended
    }

    fn facet(&self, facet: Facet) -> &str {
        match facet {
            Facet::Category => &self.category,
            Facet::Price => &self.price,
            Facet::Location => &self.location,
        }
    }

    fn from_draft(id: u64, draft: NewShop) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            rating: draft.rating,
            distance: draft.distance,
            category: draft.category,
            price: draft.price,
            location: draft.location,
            hours: draft.hours,
            offers: draft.offers,
            image: draft.image,
            recommended: draft.recommended,
            active: draft.active,
        }
    }

    fn apply_patch(&mut self, patch: ShopPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(distance) = patch.distance {
            self.distance = distance;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(offers) = patch.offers {
            self.offers = offers;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(recommended) = patch.recommended {
            self.recommended = recommended;
        }
    }
}
