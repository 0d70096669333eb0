//! The fixed dataset the directory starts with. Stands in for an external
//! data provider; values are already in masked display form.

use crate::model::Person;

/// The records every session starts with.
pub fn people() -> Vec<Person> {
    let raw = [
        (
            1,
            "Ana Souza",
            "ana.souza@example.com",
            "123.456.789-01",
            "(11) 91234-5678",
            "01/02/1990",
        ),
        (
            2,
            "Bruno Lima",
            "bruno.lima@example.com",
            "987.654.321-00",
            "(21) 99876-5432",
            "15/07/1985",
        ),
        (
            3,
            "Carla Mendes",
            "carla.mendes@example.com",
            "456.789.123-55",
            "(31) 98765-4321",
            "30/11/1992",
        ),
        (
            4,
            "Diego Ferreira",
            "diego.ferreira@example.com",
            "321.654.987-22",
            "(41) 97654-3210",
            "09/04/1998",
        ),
        (
            5,
            "Elisa Rocha",
            "elisa.rocha@example.com",
            "654.321.987-33",
            "(51) 96543-2109",
            "22/12/1979",
        ),
    ];

    raw.into_iter()
        .map(|(id, name, email, tax_id, phone, birth_date)| Person {
            id,
            name: name.to_string(),
            email: email.to_string(),
            tax_id: tax_id.to_string(),
            phone: phone.to_string(),
            birth_date: birth_date.to_string(),
        })
        .collect()
}
