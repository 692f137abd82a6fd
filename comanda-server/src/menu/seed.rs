//! Standard menu loaded at startup

use shared::MenuItem;

const MENU: &[(u32, &str, f64, &str)] = &[
    (1, "Prato Feito", 13.00, "Arroz, feijão, bife e salada"),
    (2, "Suco de Laranja", 8.00, "Suco natural 500ml"),
    (3, "Hambúrguer Artesanal", 35.00, "Pão, carne 180g, queijo e batata frita"),
    (4, "Pizza Margherita", 40.00, "Pizza tradicional italiana"),
    (5, "Guaraná", 7.00, "Lata 350ml"),
    (6, "Doce de leite", 9.00, "Uma pitada de açúcar pra alegrar seu dia"),
    (7, "Macarronada", 35.00, "Massa original de macarronada"),
    (8, "Strogonoff", 40.00, "Uma boa porção de strogonoff"),
    (9, "Pepsi", 12.00, "Lata 350ml"),
    (10, "Coca-Cola", 30.00, "Lata 350ml"),
    (11, "Coxinha", 15.00, "Coxinha de frango"),
    (12, "Suco de Acerola", 8.00, "Suco natural 500ml"),
    (13, "Cachorro-quente", 35.00, "Pão, salsicha, purê de batata, batata palha, molho de carne"),
    (14, "Pizza de calabresa", 40.00, "Pizza com calabresa"),
    (15, "Fanta", 7.00, "Lata 350ml"),
    (16, "Brigadeiro", 9.00, "Feito com chocolate de primeira"),
    (17, "Feijoada", 120.00, "Feijão preto, carne, porção de arroz, vinagrete"),
    (18, "Salada de salmão", 40.00, "Folhas verdes com salmão grelhado"),
    (19, "Guaraná Jesus", 12.00, "Lata 350ml"),
    (20, "Pudim", 30.00, "Pudim de leite condensado"),
];

/// The standard menu, ordered by id
pub fn default_items() -> Vec<MenuItem> {
    MENU.iter()
        .map(|(id, name, price, description)| MenuItem::new(*id, *name, *price, *description))
        .collect()
}
