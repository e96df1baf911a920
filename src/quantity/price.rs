quantity!(
    /// Price of a single meter unit.
    UnitPrice,
    suffix: "¤/u"
);
